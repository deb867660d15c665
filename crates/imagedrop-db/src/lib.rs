//! Imagedrop DB Library
//!
//! Metadata persistence for uploads. The durable store is a single
//! MySQL-compatible table, applied out-of-band:
//!
//! ```sql
//! CREATE TABLE upload_images (
//!     filename    TEXT,
//!     blob_url    TEXT,
//!     upload_date DATETIME
//! );
//! ```
//!
//! Connections are opened per call and TLS-verified against the CA
//! certificate materialized once at startup; see [`ca_cert`].

pub mod ca_cert;
pub mod recorder;

// Re-export commonly used types
pub use ca_cert::materialize_ca_cert;
pub use recorder::UploadRecorder;
