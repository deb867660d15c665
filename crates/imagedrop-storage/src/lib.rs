//! Imagedrop Storage Library
//!
//! This crate provides the storage abstraction and its implementations:
//! Azure Blob Storage for deployments and a local filesystem backend for
//! development and tests.
//!
//! Blob names are flat keys chosen by the caller (the upload path embeds a
//! random UUID in every name) and uploads overwrite any existing object
//! under the same key.

pub mod azure;
pub mod factory;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use azure::AzureBlobStorage;
pub use factory::create_storage;
pub use imagedrop_core::StorageBackend;
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
