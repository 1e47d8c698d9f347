//! Storage-key generation and validation.
//!
//! A storage key is `<uuid-v4>_<sanitized original name>`: the UUID makes
//! keys practically collision-free even when two clients upload files with
//! identical names concurrently, and the sanitized tail preserves the
//! extension that drives content-type resolution.
//!
//! Validation guards every key-addressed read and delete: a key that could
//! escape the backing directory, or that names an in-flight temp file, can
//! never resolve to a stored object.

use uuid::Uuid;

/// Fallback name used when the client-supplied file name sanitizes away
/// entirely.
const UNNAMED: &str = "unnamed";

/// Generate a fresh storage key for a client-supplied original name.
pub fn storage_key(original_name: &str) -> String {
    format!("{}_{}", Uuid::new_v4(), sanitize_file_name(original_name))
}

/// Reduce a client-supplied file name to a safe single path component.
///
/// Takes the final component of any path the client sent, strips control
/// characters, and trims surrounding whitespace. A name with nothing left
/// becomes `"unnamed"`.
pub fn sanitize_file_name(original_name: &str) -> String {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);
    let cleaned: String = base.chars().filter(|c| !c.is_control()).collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        UNNAMED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Whether a client-supplied key can possibly name a stored object.
///
/// Generated keys always pass. Keys with path separators or control
/// characters could address outside the backing directory, and dot-prefixed
/// names are reserved for unpublished temp files; all of those are treated
/// as "not found" by the store rather than touched on disk.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && !key.contains(['/', '\\'])
        && !key.chars().any(|c| c.is_control())
}
