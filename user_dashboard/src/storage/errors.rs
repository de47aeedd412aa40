use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let error = StorageError::Storage("Connection failed".to_string());
        assert_eq!(error.to_string(), "Storage error: Connection failed");
    }

    #[test]
    fn test_config_error_display() {
        let error = StorageError::Config("DASHBOARD_DATA_STORE_URL must be set".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: DASHBOARD_DATA_STORE_URL must be set"
        );
    }

    #[test]
    fn test_from_sqlx_error() {
        let sqlx_error = sqlx::Error::RowNotFound;

        let storage_error = StorageError::from(sqlx_error);

        match storage_error {
            StorageError::Storage(msg) => {
                assert!(!msg.is_empty(), "Error message should carry the original error");
            }
            _ => panic!("Expected Storage variant"),
        }
    }

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<StorageError>();
    }
}
