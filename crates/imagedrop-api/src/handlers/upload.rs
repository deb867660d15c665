use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use imagedrop_core::{unique_blob_name, AppError, UploadResponse};

use crate::error::{ErrorResponse, HttpAppError};
use crate::spool::SpoolFile;
use crate::state::AppState;

/// Upload handler
///
/// Receives one multipart file, spools it to a temp file, uploads the
/// spooled bytes to blob storage under a freshly generated name, and records
/// a metadata row. The metadata write is best-effort and cannot fail the
/// request; the spool file is released on every exit path.
///
/// # Errors
/// - `AppError::InvalidInput` - Malformed multipart body or no file field
/// - `AppError::Storage` - Storage upload failure
/// - `AppError::Internal` - Spool filesystem failure
#[utoipa::path(
    post,
    path = "/upload",
    tag = "upload",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File uploaded successfully", body = UploadResponse),
        (status = 400, description = "Invalid multipart payload", body = ErrorResponse),
        (status = 500, description = "Storage or internal failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload"))]
pub async fn upload(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let (original_filename, data) = read_file_field(multipart).await?;

    let blob_name = unique_blob_name(&original_filename);

    let spool = SpoolFile::write(&blob_name, &data)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to spool upload: {}", e)))?;

    let contents = spool
        .read()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read spooled upload: {}", e)))?;

    let blob_url = state.storage.upload(&blob_name, contents).await?;

    state.recorder.record(&blob_name, &blob_url).await;

    drop(spool);

    tracing::info!(
        filename = %blob_name,
        original = %original_filename,
        "Upload complete"
    );

    Ok(Json(UploadResponse {
        message: "File uploaded successfully".to_string(),
        filename: blob_name,
        blob_url: Some(blob_url),
    }))
}

/// Pull the first field carrying a filename out of the multipart body,
/// fully buffered.
async fn read_file_field(mut multipart: Multipart) -> Result<(String, Vec<u8>), HttpAppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Invalid multipart payload: {}", e)))?
    {
        let Some(filename) = field.file_name().map(String::from) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read upload: {}", e)))?;
        return Ok((filename, data.to_vec()));
    }

    Err(AppError::InvalidInput("Multipart body contains no file field".to_string()).into())
}
