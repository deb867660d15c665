//! Imagedrop Core Library
//!
//! This crate provides configuration, error types, response models, and
//! blob-name generation shared by the storage, db, and api crates.

pub mod config;
pub mod error;
pub mod models;
pub mod naming;
pub mod storage_types;

// Re-export commonly used types
pub use config::{Config, DbConfig};
pub use error::{AppError, LogLevel};
pub use models::UploadResponse;
pub use naming::unique_blob_name;
pub use storage_types::StorageBackend;
