use sqlx::{Pool, Sqlite};

use crate::storage::DB_TABLE_USERS;
use crate::users::{errors::UserError, types::User};

// SQLite implementations
//
// The implicit rowid is the storage-internal identifier: listings are
// ordered by it, and "first match" on a duplicated id means the row
// with the smallest rowid.

pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    // No PRIMARY KEY on id: duplicate ids are allowed
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER NOT NULL,
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

pub(super) async fn list_users_sqlite(pool: &Pool<Sqlite>) -> Result<Vec<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT id, name FROM {} ORDER BY rowid
        "#,
        table_name
    ))
    .fetch_all(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn find_user_sqlite(
    pool: &Pool<Sqlite>,
    id: i64,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT id, name FROM {} WHERE id = ? ORDER BY rowid LIMIT 1
        "#,
        table_name
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn insert_user_sqlite(pool: &Pool<Sqlite>, user: &User) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {} (id, name) VALUES (?, ?)
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

pub(super) async fn update_user_sqlite(
    pool: &Pool<Sqlite>,
    id: i64,
    new_name: &str,
) -> Result<u64, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    // Single conditional statement; the subquery pins the oldest
    // matching row and yields NULL (zero rows affected) on a miss.
    let result = sqlx::query(&format!(
        r#"
        UPDATE {table} SET name = ?
        WHERE rowid = (SELECT MIN(rowid) FROM {table} WHERE id = ?)
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

pub(super) async fn delete_user_sqlite(
    pool: &Pool<Sqlite>,
    id: i64,
) -> Result<u64, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {table}
        WHERE rowid = (SELECT MIN(rowid) FROM {table} WHERE id = ?)
        "#,
        table = table_name
    ))
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(result.rows_affected())
}
