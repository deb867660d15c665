//! Request-scoped temp-file spool.
//!
//! Uploaded bytes are written to `<os-temp-dir>/<blob_name>` before the
//! storage call, and the file is removed when the guard drops, on every
//! exit path rather than only on success. Blob names embed a random UUID,
//! so concurrent requests never share a spool path.

use std::path::PathBuf;

/// Guard for a spooled upload; the file is removed on drop.
pub struct SpoolFile {
    path: PathBuf,
}

impl SpoolFile {
    /// Write `data` to a spool file named after the generated blob name.
    pub async fn write(blob_name: &str, data: &[u8]) -> std::io::Result<Self> {
        let path = std::env::temp_dir().join(blob_name);
        tokio::fs::write(&path, data).await?;
        Ok(SpoolFile { path })
    }

    /// Read the spooled bytes back from disk.
    pub async fn read(&self) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for SpoolFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove spool file"
                );
            }
        }
    }
}
