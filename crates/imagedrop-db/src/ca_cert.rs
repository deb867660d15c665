//! CA-certificate materialization for the database TLS connection.
//!
//! The certificate arrives through the environment as a single line with
//! escaped newlines. It is normalized and written once at startup to a
//! uniquely named `.pem` temp file whose path every subsequent connection
//! reuses. The file lives for the rest of the process and is not removed on
//! exit.

use anyhow::Context;
use std::io::Write;
use std::path::PathBuf;

/// Write the configured CA certificate to a `.pem` temp file and return its
/// filesystem path.
pub fn materialize_ca_cert(raw: &str) -> anyhow::Result<PathBuf> {
    let pem = normalize_pem(raw);

    let file = tempfile::Builder::new()
        .prefix("imagedrop-ca-")
        .suffix(".pem")
        .tempfile()
        .context("Failed to create CA certificate temp file")?;

    let (mut file, path) = file
        .keep()
        .context("Failed to persist CA certificate temp file")?;
    file.write_all(pem.as_bytes())
        .context("Failed to write CA certificate")?;

    tracing::info!(path = %path.display(), "CA certificate materialized");

    Ok(path)
}

/// Undo environment-variable escaping: `\n` sequences become real newlines,
/// remaining backslashes are stripped.
fn normalize_pem(raw: &str) -> String {
    raw.replace("\\n", "\n").replace('\\', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_escaped_newlines() {
        let raw = "-----BEGIN CERTIFICATE-----\\nMIIBfake\\n-----END CERTIFICATE-----";
        assert_eq!(
            normalize_pem(raw),
            "-----BEGIN CERTIFICATE-----\nMIIBfake\n-----END CERTIFICATE-----"
        );
    }

    #[test]
    fn strips_stray_backslashes() {
        assert_eq!(normalize_pem("MIIB\\fake"), "MIIBfake");
    }

    #[test]
    fn leaves_clean_pem_untouched() {
        let pem = "-----BEGIN CERTIFICATE-----\nMIIBfake\n-----END CERTIFICATE-----\n";
        assert_eq!(normalize_pem(pem), pem);
    }

    #[test]
    fn materializes_to_a_pem_file() {
        let path = materialize_ca_cert("-----BEGIN CERTIFICATE-----\\nMIIBfake").expect("write");
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("pem"));
        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "-----BEGIN CERTIFICATE-----\nMIIBfake");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn paths_are_unique_per_call() {
        let a = materialize_ca_cert("cert").expect("write");
        let b = materialize_ca_cert("cert").expect("write");
        assert_ne!(a, b);
        std::fs::remove_file(a).ok();
        std::fs::remove_file(b).ok();
    }
}
