//! Storage backend identifiers.

use serde::{Deserialize, Serialize};

/// Supported storage backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Azure Blob Storage (production).
    Azure,
    /// Local filesystem (development and tests).
    Local,
}
