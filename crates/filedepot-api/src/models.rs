//! # API Response Envelopes
//!
//! Wire-format DTOs for the files API. Every response carries a `success`
//! flag and a human-readable `message`; field names serialize in camelCase.
//! Domain types from filedepot-store convert into these at the boundary.

use chrono::{DateTime, Utc};
use filedepot_store::StoredObject;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of a file upload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Whether the upload succeeded.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// The generated storage key, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Stored size in bytes, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

/// Summary of one stored file.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// Storage key; doubles as the download path segment.
    pub file_name: String,
    /// Size in bytes.
    pub size: u64,
    /// Creation timestamp (UTC).
    pub created_at: DateTime<Utc>,
    /// MIME type resolved from the file extension.
    pub content_type: String,
}

impl From<StoredObject> for FileInfo {
    fn from(object: StoredObject) -> Self {
        Self {
            file_name: object.key,
            size: object.size,
            created_at: object.created_at,
            content_type: object.content_type,
        }
    }
}

/// Envelope for the file listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileListResponse {
    /// Always `true`; an unreadable backing store reports an empty list.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// Stored files, most recent first.
    pub data: Vec<FileInfo>,
}

/// Message-only envelope, used for deletions and all error responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
}

/// Liveness probe response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `true` while the process is serving.
    pub success: bool,
    /// Human-readable service banner.
    pub message: String,
    /// Server time (UTC) at the moment of the probe.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_response_omits_absent_fields() {
        let response = UploadResponse {
            success: false,
            message: "upload is empty".to_string(),
            file_name: None,
            file_size: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("fileName"));
        assert!(!json.contains("fileSize"));
    }

    #[test]
    fn upload_response_serializes_camel_case() {
        let response = UploadResponse {
            success: true,
            message: "File uploaded successfully".to_string(),
            file_name: Some("abc_report.pdf".to_string()),
            file_size: Some(10),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"fileName\":\"abc_report.pdf\""));
        assert!(json.contains("\"fileSize\":10"));
    }

    #[test]
    fn file_info_converts_from_stored_object() {
        let object = StoredObject {
            key: "abc_photo.png".to_string(),
            size: 42,
            created_at: Utc::now(),
            content_type: "image/png".to_string(),
        };
        let info = FileInfo::from(object);
        assert_eq!(info.file_name, "abc_photo.png");
        assert_eq!(info.size, 42);
        assert_eq!(info.content_type, "image/png");

        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"contentType\":\"image/png\""));
        assert!(json.contains("\"createdAt\""));
    }
}
