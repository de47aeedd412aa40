//! Data store configuration
//!
//! Connection settings are read from the environment once, into an
//! explicit [`DataStoreConfig`] value owned by the caller. The resulting
//! store object is passed into request handlers by reference rather than
//! living in a process-wide global.

use std::{env, str::FromStr, sync::Arc, sync::LazyLock, time::Duration};

use super::errors::StorageError;
use super::types::{DataStore, PostgresDataStore, SqliteDataStore};

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Table prefix from environment variable
pub(crate) static DB_TABLE_PREFIX: LazyLock<String> =
    LazyLock::new(|| env::var("DB_TABLE_PREFIX").unwrap_or_else(|_| "dash_".to_string()));

/// Users table name
pub(crate) static DB_TABLE_USERS: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_USERS").unwrap_or_else(|_| format!("{}{}", *DB_TABLE_PREFIX, "users"))
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StoreKind {
    Sqlite,
    Postgres,
}

impl FromStr for StoreKind {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqlite" => Ok(Self::Sqlite),
            "postgres" => Ok(Self::Postgres),
            t => Err(StorageError::Config(format!(
                "Unsupported store type: {t}. Supported types are 'sqlite' and 'postgres'"
            ))),
        }
    }
}

/// Connection settings for the backing database.
#[derive(Clone, Debug)]
pub struct DataStoreConfig {
    kind: StoreKind,
    url: String,
    connect_timeout: Duration,
}

impl DataStoreConfig {
    /// Read connection settings from the environment.
    ///
    /// `DASHBOARD_DATA_STORE_TYPE` and `DASHBOARD_DATA_STORE_URL` are
    /// required; `DASHBOARD_DB_CONNECT_TIMEOUT` (seconds) is optional.
    pub fn from_env() -> Result<Self, StorageError> {
        let kind = env::var("DASHBOARD_DATA_STORE_TYPE")
            .map_err(|_| {
                StorageError::Config("DASHBOARD_DATA_STORE_TYPE must be set".to_string())
            })?
            .parse::<StoreKind>()?;

        let url = env::var("DASHBOARD_DATA_STORE_URL").map_err(|_| {
            StorageError::Config("DASHBOARD_DATA_STORE_URL must be set".to_string())
        })?;

        let connect_timeout = match env::var("DASHBOARD_DB_CONNECT_TIMEOUT") {
            Ok(secs) => Duration::from_secs(secs.parse::<u64>().map_err(|_| {
                StorageError::Config(format!(
                    "DASHBOARD_DB_CONNECT_TIMEOUT must be a number of seconds, got: {secs}"
                ))
            })?),
            Err(_) => Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self {
            kind,
            url,
            connect_timeout,
        })
    }

    /// In-process SQLite store backed by a file path, mainly for tests
    /// and single-node deployments.
    pub fn sqlite(url: impl Into<String>) -> Self {
        Self {
            kind: StoreKind::Sqlite,
            url: url.into(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Open a lazily connecting pool for the configured backend.
    pub fn connect(&self) -> Result<Arc<dyn DataStore>, StorageError> {
        tracing::info!(
            "Initializing data store with type: {:?}, url: {}",
            self.kind,
            self.url
        );

        let store: Arc<dyn DataStore> = match self.kind {
            StoreKind::Sqlite => {
                let opts = sqlx::sqlite::SqliteConnectOptions::from_str(&self.url)
                    .map_err(|e| {
                        StorageError::Config(format!("Invalid SQLite connection string: {e}"))
                    })?
                    .create_if_missing(true);

                let pool = sqlx::pool::PoolOptions::<sqlx::Sqlite>::new()
                    .acquire_timeout(self.connect_timeout)
                    .connect_lazy_with(opts);

                Arc::new(SqliteDataStore { pool }) as Arc<dyn DataStore>
            }
            StoreKind::Postgres => {
                let pool = sqlx::pool::PoolOptions::<sqlx::Postgres>::new()
                    .acquire_timeout(self.connect_timeout)
                    .connect_lazy(&self.url)
                    .map_err(|e| {
                        StorageError::Config(format!("Failed to create Postgres pool: {e}"))
                    })?;

                Arc::new(PostgresDataStore { pool }) as Arc<dyn DataStore>
            }
        };

        Ok(store)
    }
}
