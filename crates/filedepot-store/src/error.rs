//! Storage error types.
//!
//! Structured errors for object store operations, built with `thiserror`.
//! Absent keys are not errors — [`crate::FileStore::get`] returns
//! `Ok(None)` and [`crate::FileStore::delete`] returns `Ok(false)` for
//! them, so every variant here represents a genuine failure.

use thiserror::Error;

/// Errors that can occur during object store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The upload carried no bytes. No write is attempted.
    #[error("upload is empty")]
    EmptyUpload,

    /// The upload exceeds the configured maximum object size.
    /// No write is attempted.
    #[error("payload of {size} bytes exceeds the {max} byte limit")]
    PayloadTooLarge {
        /// Size of the rejected upload in bytes.
        size: u64,
        /// The configured maximum object size in bytes.
        max: u64,
    },

    /// The backing store failed an I/O operation (disk full, permission
    /// denied, object vanished mid-read). Retryable by the caller.
    #[error("backing store unavailable: {0}")]
    Unavailable(#[from] std::io::Error),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_too_large_display_carries_sizes() {
        let err = StoreError::PayloadTooLarge {
            size: 200,
            max: 100,
        };
        let msg = format!("{err}");
        assert!(msg.contains("200"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn io_error_converts_to_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::from(io);
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert!(format!("{err}").contains("denied"));
    }

    #[test]
    fn empty_upload_display() {
        assert_eq!(format!("{}", StoreError::EmptyUpload), "upload is empty");
    }
}
