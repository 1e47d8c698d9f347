//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps [`StoreError`] outcomes from filedepot-store to HTTP status codes
//! and renders the same `{ success, message }` envelope the success paths
//! use, so clients parse one response shape everywhere.
//! Never exposes internal error details in 500-class responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use filedepot_store::StoreError;
use thiserror::Error;

use crate::models::StatusResponse;

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested object does not exist (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Upload validation failed — empty body, missing file part,
    /// malformed multipart (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Upload exceeds the configured size cap (413).
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    /// The backing store failed an I/O operation; retryable (503).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Internal server error (500). Message is logged but not returned
    /// to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code for this error.
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Never expose internal error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::Unavailable(_) => tracing::error!(error = %self, "backing store fault"),
            _ => {}
        }

        let body = StatusResponse {
            success: false,
            message,
        };
        (status, Json(body)).into_response()
    }
}

/// Convert store errors to API errors.
///
/// Not-found never flows through here — the store expresses it as
/// `Ok(None)`/`Ok(false)` and handlers map that to [`AppError::NotFound`].
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmptyUpload => Self::BadRequest(err.to_string()),
            StoreError::PayloadTooLarge { .. } => Self::PayloadTooLarge(err.to_string()),
            StoreError::Unavailable(_) => Self::Unavailable(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    /// Helper to extract status and body from a Response.
    async fn response_parts(err: AppError) -> (StatusCode, StatusResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: StatusResponse = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::PayloadTooLarge("x".into()).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            AppError::Unavailable("x".into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_errors_map_to_expected_variants() {
        assert!(matches!(
            AppError::from(StoreError::EmptyUpload),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            AppError::from(StoreError::PayloadTooLarge { size: 2, max: 1 }),
            AppError::PayloadTooLarge(_)
        ));
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            AppError::from(StoreError::from(io)),
            AppError::Unavailable(_)
        ));
    }

    #[tokio::test]
    async fn into_response_not_found() {
        let (status, body) = response_parts(AppError::NotFound("File not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.success);
        assert!(body.message.contains("File not found"));
    }

    #[tokio::test]
    async fn into_response_payload_too_large() {
        let err = AppError::from(StoreError::PayloadTooLarge { size: 9, max: 8 });
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(!body.success);
        assert!(body.message.contains("9 bytes"));
    }

    #[tokio::test]
    async fn into_response_internal_hides_details() {
        let (status, body) = response_parts(AppError::Internal("disk geometry".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.success);
        assert!(
            !body.message.contains("disk geometry"),
            "internal error details must not leak: {}",
            body.message
        );
    }
}
