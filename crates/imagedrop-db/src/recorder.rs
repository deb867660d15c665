//! Best-effort metadata persistence for successful uploads.

use chrono_tz::Asia::Tokyo;
use imagedrop_core::DbConfig;
use sqlx::mysql::{MySqlConnectOptions, MySqlSslMode};
use sqlx::{Connection, MySqlConnection};
use std::path::PathBuf;

/// Records one `upload_images` row per successful upload.
///
/// Each call opens a fresh connection, inserts a single parameterized row,
/// and closes the connection again whatever the outcome. Persistence is
/// best-effort: failures are logged and swallowed, so the upload response
/// never depends on the database being reachable.
#[derive(Clone)]
pub struct UploadRecorder {
    db: DbConfig,
    ca_cert_path: PathBuf,
}

impl UploadRecorder {
    pub fn new(db: DbConfig, ca_cert_path: PathBuf) -> Self {
        Self { db, ca_cert_path }
    }

    /// Insert a metadata row for `filename`/`blob_url`. Never fails.
    #[tracing::instrument(skip(self))]
    pub async fn record(&self, filename: &str, blob_url: &str) {
        if let Err(e) = self.try_record(filename, blob_url).await {
            tracing::error!(
                error = %e,
                filename = %filename,
                "Failed to record upload metadata"
            );
        }
    }

    async fn try_record(&self, filename: &str, blob_url: &str) -> Result<(), sqlx::Error> {
        let options = MySqlConnectOptions::new()
            .host(&self.db.host)
            .port(self.db.port)
            .username(&self.db.user)
            .password(&self.db.password)
            .database(&self.db.database)
            .ssl_mode(MySqlSslMode::VerifyCa)
            .ssl_ca(&self.ca_cert_path);

        let mut conn = MySqlConnection::connect_with(&options).await?;

        let upload_date = jst_timestamp();
        let result = sqlx::query(
            "INSERT INTO upload_images (filename, blob_url, upload_date) VALUES (?, ?, ?)",
        )
        .bind(filename)
        .bind(blob_url)
        .bind(&upload_date)
        .execute(&mut conn)
        .await;

        // Always close, including when the insert failed.
        let closed = conn.close().await;
        result?;
        closed?;

        tracing::info!(
            filename = %filename,
            upload_date = %upload_date,
            "Upload metadata recorded"
        );

        Ok(())
    }
}

/// Current wall-clock time in Japan Standard Time, second precision,
/// formatted for the `upload_date` column.
fn jst_timestamp() -> String {
    chrono::Utc::now()
        .with_timezone(&Tokyo)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
