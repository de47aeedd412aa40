use sqlx::{Pool, Postgres};

use crate::storage::DB_TABLE_USERS;
use crate::users::{errors::UserError, types::User};

// PostgreSQL implementations
//
// doc_id is the storage-internal identifier, equivalent to SQLite's
// rowid. It never appears in query projections.

pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            doc_id BIGSERIAL PRIMARY KEY,
            id BIGINT NOT NULL,
            name TEXT NOT NULL
        )
        "#,
        table_name
    ))
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn list_users_postgres(pool: &Pool<Postgres>) -> Result<Vec<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT id, name FROM {} ORDER BY doc_id
        "#,
        table_name
    ))
    .fetch_all(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn find_user_postgres(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT id, name FROM {} WHERE id = $1 ORDER BY doc_id LIMIT 1
        "#,
        table_name
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn insert_user_postgres(
    pool: &Pool<Postgres>,
    user: &User,
) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {} (id, name) VALUES ($1, $2)
        "#,
        table_name
    ))
    .bind(user.id)
    .bind(&user.name)
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn update_user_postgres(
    pool: &Pool<Postgres>,
    id: i64,
    new_name: &str,
) -> Result<u64, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let result = sqlx::query(&format!(
        r#"
        UPDATE {table} SET name = $1
        WHERE doc_id = (SELECT MIN(doc_id) FROM {table} WHERE id = $2)
        "#,
        table = table_name
    ))
    .bind(new_name)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(result.rows_affected())
}

pub(super) async fn delete_user_postgres(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<u64, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {table}
        WHERE doc_id = (SELECT MIN(doc_id) FROM {table} WHERE id = $1)
        "#,
        table = table_name
    ))
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(result.rows_affected())
}
