//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use imagedrop_core::Config;
use imagedrop_db::{materialize_ca_cert, UploadRecorder};
use imagedrop_storage::create_storage;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    // CA material next: the process must not serve anything without it.
    let ca_cert_path =
        materialize_ca_cert(&config.ssl_ca_cert).context("Failed to materialize SSL_CA_CERT")?;

    tracing::info!("Initializing storage backend...");
    let storage = create_storage(&config)
        .await
        .context("Failed to initialize storage backend")?;
    tracing::info!(
        backend = ?storage.backend_type(),
        "Storage backend initialized successfully"
    );

    let recorder = UploadRecorder::new(config.db.clone(), ca_cert_path);

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        recorder,
    });

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
