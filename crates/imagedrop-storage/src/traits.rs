//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must
//! implement, so the upload path never couples to a specific provider.

use async_trait::async_trait;
use imagedrop_core::StorageBackend;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Backends store opaque objects under caller-chosen blob names and hand
/// back a publicly addressable URL. Uploading to an existing name replaces
/// the object.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Upload `data` under `blob_name` and return the object's public URL.
    async fn upload(&self, blob_name: &str, data: Vec<u8>) -> StorageResult<String>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
