mod config;
mod errors;
mod types;

pub use config::DataStoreConfig;
pub(crate) use config::DB_TABLE_USERS;
pub use errors::StorageError;
pub use types::DataStore;
