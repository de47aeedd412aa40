mod postgres;
mod sqlite;

use std::sync::Arc;

use crate::storage::{DataStore, DataStoreConfig};
use crate::users::{errors::UserError, types::User};

use postgres::*;
use sqlite::*;

/// Handle to the users collection.
///
/// Cheap to clone; all clones share one pool. Constructed explicitly at
/// process startup and passed into request handlers, which keeps the
/// connection lifecycle tied to the service root rather than a global.
#[derive(Clone)]
pub struct UserStore {
    store: Arc<dyn DataStore>,
}

impl UserStore {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    /// Build a store from environment configuration and create the
    /// users table if it is missing.
    pub async fn connect() -> Result<Self, UserError> {
        let store = Self::new(DataStoreConfig::from_env()?.connect()?);
        store.init().await?;
        Ok(store)
    }

    /// Initialize the users table
    pub async fn init(&self) -> Result<(), UserError> {
        if let Some(pool) = self.store.as_sqlite() {
            create_tables_sqlite(pool).await
        } else if let Some(pool) = self.store.as_postgres() {
            create_tables_postgres(pool).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// All users, in insertion order.
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        if let Some(pool) = self.store.as_sqlite() {
            list_users_sqlite(pool).await
        } else if let Some(pool) = self.store.as_postgres() {
            list_users_postgres(pool).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Look up a user by id.
    ///
    /// Ids are not unique; when several rows match, the first-inserted
    /// one is returned.
    pub async fn find_user(&self, id: i64) -> Result<Option<User>, UserError> {
        if let Some(pool) = self.store.as_sqlite() {
            find_user_sqlite(pool, id).await
        } else if let Some(pool) = self.store.as_postgres() {
            find_user_postgres(pool, id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Insert a user unconditionally. No existence check is performed,
    /// so duplicate ids produce duplicate rows.
    pub async fn insert_user(&self, user: &User) -> Result<(), UserError> {
        if let Some(pool) = self.store.as_sqlite() {
            insert_user_sqlite(pool, user).await
        } else if let Some(pool) = self.store.as_postgres() {
            insert_user_postgres(pool, user).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Rename the first-inserted user with a matching id.
    ///
    /// A single conditional UPDATE; `UserError::NotFound` when no row
    /// matched.
    pub async fn update_user(&self, id: i64, new_name: &str) -> Result<(), UserError> {
        let rows_affected = if let Some(pool) = self.store.as_sqlite() {
            update_user_sqlite(pool, id, new_name).await?
        } else if let Some(pool) = self.store.as_postgres() {
            update_user_postgres(pool, id, new_name).await?
        } else {
            return Err(UserError::Storage("Unsupported database type".to_string()));
        };

        if rows_affected == 0 {
            return Err(UserError::NotFound);
        }
        Ok(())
    }

    /// Delete the first-inserted user with a matching id.
    pub async fn delete_user(&self, id: i64) -> Result<(), UserError> {
        let rows_affected = if let Some(pool) = self.store.as_sqlite() {
            delete_user_sqlite(pool, id).await?
        } else if let Some(pool) = self.store.as_postgres() {
            delete_user_postgres(pool, id).await?
        } else {
            return Err(UserError::Storage("Unsupported database type".to_string()));
        };

        if rows_affected == 0 {
            return Err(UserError::NotFound);
        }
        Ok(())
    }
}
