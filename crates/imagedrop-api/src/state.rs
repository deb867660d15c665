//! Application state.
//!
//! One explicitly constructed context object holds everything a request
//! needs: configuration, the storage client handle, and the metadata
//! recorder. It is built once in setup and shared via axum `State`; there
//! are no process-wide globals.

use imagedrop_core::Config;
use imagedrop_db::UploadRecorder;
use imagedrop_storage::Storage;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub recorder: UploadRecorder,
}
