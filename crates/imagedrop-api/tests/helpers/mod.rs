//! Test helpers: build AppState and router for integration tests.
//!
//! Run with: `cargo test -p imagedrop-api`. Tests use the local storage
//! backend in a temp directory and a recorder pointed at an unreachable
//! database (metadata persistence is best-effort by contract, so no live
//! database is needed).

pub mod storage;

use axum_test::TestServer;
use imagedrop_api::setup::routes;
use imagedrop_api::state::AppState;
use imagedrop_core::{Config, DbConfig, StorageBackend};
use imagedrop_db::UploadRecorder;
use imagedrop_storage::{LocalStorage, Storage};
use std::sync::Arc;
use tempfile::TempDir;

/// Base URL the local test backend reports for stored objects.
pub const TEST_BASE_URL: &str = "http://localhost:8000/media";

/// Test application: server plus the owned storage directory.
pub struct TestApp {
    pub server: TestServer,
    pub storage_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// DbConfig pointing at a port nothing listens on; recorder failures must
/// stay invisible to callers.
pub fn unreachable_db() -> DbConfig {
    DbConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        user: "imagedrop".to_string(),
        password: "imagedrop".to_string(),
        database: "imagedrop".to_string(),
    }
}

pub fn test_config(storage_dir: &TempDir) -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        storage_backend: StorageBackend::Local,
        blob_connection_string: None,
        blob_container_name: None,
        local_storage_path: Some(storage_dir.path().display().to_string()),
        local_storage_base_url: Some(TEST_BASE_URL.to_string()),
        db: unreachable_db(),
        ssl_ca_cert: "-----BEGIN CERTIFICATE-----\\nMIIBfake\\n-----END CERTIFICATE-----"
            .to_string(),
    }
}

/// Setup test app with local storage and an unreachable database.
pub async fn setup_test_app() -> TestApp {
    let storage_dir = TempDir::new().expect("create storage dir");
    let config = test_config(&storage_dir);

    let storage = LocalStorage::new(storage_dir.path(), TEST_BASE_URL.to_string())
        .await
        .expect("create local storage");

    setup_test_app_with_storage(config, Arc::new(storage), storage_dir)
}

/// Build the app around an explicit storage implementation (e.g. a failing
/// test double).
pub fn setup_test_app_with_storage(
    config: Config,
    storage: Arc<dyn Storage>,
    storage_dir: TempDir,
) -> TestApp {
    let ca_path = storage_dir.path().join("ca.pem");
    std::fs::write(
        &ca_path,
        "-----BEGIN CERTIFICATE-----\nMIIBfake\n-----END CERTIFICATE-----\n",
    )
    .expect("write test CA");

    let recorder = UploadRecorder::new(config.db.clone(), ca_path);

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        recorder,
    });

    let router = routes::setup_routes(&config, state).expect("build router");
    let server = TestServer::new(router).expect("start test server");

    TestApp {
        server,
        storage_dir,
    }
}
