use crate::{AzureBlobStorage, LocalStorage, Storage, StorageError, StorageResult};
use imagedrop_core::{Config, StorageBackend};
use std::sync::Arc;

/// Create a storage backend based on configuration
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend {
        StorageBackend::Azure => {
            let connection_string = config.blob_connection_string.as_deref().ok_or_else(|| {
                StorageError::ConfigError("BLOB_CONNECTION_STRING not configured".to_string())
            })?;
            let container = config.blob_container_name.clone().ok_or_else(|| {
                StorageError::ConfigError("BLOB_CONTAINER_NAME not configured".to_string())
            })?;

            let storage = AzureBlobStorage::new(connection_string, container)?;
            Ok(Arc::new(storage))
        }

        StorageBackend::Local => {
            let base_path = config.local_storage_path.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
            })?;
            let base_url = config.local_storage_base_url.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_BASE_URL not configured".to_string())
            })?;

            let storage = LocalStorage::new(base_path, base_url).await?;
            Ok(Arc::new(storage))
        }
    }
}
