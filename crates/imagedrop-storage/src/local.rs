use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use imagedrop_core::StorageBackend;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for blob storage
    /// * `base_url` - Base URL files are served from (e.g., "http://localhost:8000/media")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url,
        })
    }

    /// Convert a blob name to a filesystem path, rejecting traversal.
    fn key_to_path(&self, blob_name: &str) -> StorageResult<PathBuf> {
        if blob_name.is_empty() || blob_name.contains("..") || blob_name.starts_with('/') {
            return Err(StorageError::InvalidKey(
                "Blob name contains invalid characters".to_string(),
            ));
        }
        Ok(self.base_path.join(blob_name))
    }

    fn generate_url(&self, blob_name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), blob_name)
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn upload(&self, blob_name: &str, data: Vec<u8>) -> StorageResult<String> {
        let path = self.key_to_path(blob_name)?;
        let size = data.len();

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        let url = self.generate_url(blob_name);

        tracing::info!(
            path = %path.display(),
            key = %blob_name,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok(url)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
