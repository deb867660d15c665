//! Storage test doubles.

use async_trait::async_trait;
use imagedrop_core::StorageBackend;
use imagedrop_storage::{Storage, StorageError, StorageResult};

/// Storage that refuses every upload.
pub struct FailingStorage;

#[async_trait]
impl Storage for FailingStorage {
    async fn upload(&self, _blob_name: &str, _data: Vec<u8>) -> StorageResult<String> {
        Err(StorageError::UploadFailed(
            "simulated backend outage".to_string(),
        ))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
