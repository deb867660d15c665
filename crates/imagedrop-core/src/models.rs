//! Response models for the public HTTP surface.

use serde::Serialize;
use utoipa::ToSchema;

/// Body returned by `POST /upload` on success.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Generated blob name (`<uuid>.<ext>`).
    pub filename: String,
    /// Public URL of the stored object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_url: Option<String>,
}
