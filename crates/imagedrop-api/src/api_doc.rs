//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use imagedrop_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Imagedrop API",
        version = "0.1.0",
        description = "Single-endpoint upload service: multipart files are stored in a blob container and recorded in the metadata database."
    ),
    paths(handlers::upload::upload, handlers::health::liveness),
    components(schemas(models::UploadResponse, error::ErrorResponse)),
    tags(
        (name = "upload", description = "File upload"),
        (name = "health", description = "Health probes")
    )
)]
pub struct ApiDoc;
