//! Blob-name generation for uploaded files.

use uuid::Uuid;

/// Derive a unique blob name from the original filename.
///
/// The name is a random v4 UUID followed by the original file's extension
/// (the substring after the last `.`), case preserved. Filenames without a
/// usable extension (no dot, a trailing dot, or a bare dotfile name) map to
/// the UUID alone.
pub fn unique_blob_name(original: &str) -> String {
    let id = Uuid::new_v4();
    match extension_of(original) {
        Some(ext) => format!("{}.{}", id, ext),
        None => id.to_string(),
    }
}

/// Extension after the last `.`, when there is a usable one.
fn extension_of(filename: &str) -> Option<&str> {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}
