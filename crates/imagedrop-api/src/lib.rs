//! Imagedrop API Library
//!
//! This crate provides the HTTP surface for the upload service: handlers,
//! error conversion, and application setup.

// Module declarations
mod api_doc;
mod handlers;
mod spool;
mod telemetry;

// Public modules
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
pub use telemetry::init_tracing;
