//! # Files API
//!
//! Handles file upload, download, listing, deletion, and the liveness
//! probe. Handlers carry no storage logic — they translate between the
//! HTTP surface and [`FileStore`].
//!
//! ## Endpoints
//!
//! - `POST /api/files/upload` — multipart upload, one file part
//! - `GET /api/files/download/:file_name` — binary download
//! - `GET /api/files/list` — all stored files, most recent first
//! - `DELETE /api/files/delete/:file_name` — remove one file
//! - `GET /api/files/health` — liveness probe

use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::Utc;

use crate::error::AppError;
use crate::models::{FileInfo, FileListResponse, HealthResponse, StatusResponse, UploadResponse};
use crate::state::AppState;

/// Build the files router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/files/upload", post(upload_file))
        .route("/api/files/download/:file_name", get(download_file))
        .route("/api/files/list", get(list_files))
        .route("/api/files/delete/:file_name", delete(delete_file))
        .route("/api/files/health", get(health))
}

/// POST /api/files/upload — Store the first file part of a multipart body.
#[utoipa::path(
    post,
    path = "/api/files/upload",
    responses(
        (status = 200, description = "File stored", body = UploadResponse),
        (status = 400, description = "Missing or empty file part", body = StatusResponse),
        (status = 413, description = "File exceeds the size cap", body = StatusResponse),
        (status = 503, description = "Backing store fault", body = StatusResponse),
    ),
    tag = "files"
)]
pub(crate) async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(err.to_string()))?
    {
        let Some(original_name) = field.file_name().map(str::to_string) else {
            // Non-file form fields are skipped, matching the reference API
            // which bound only the file parameter.
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|err| AppError::BadRequest(err.to_string()))?;

        let stored = state.store.put(&original_name, &bytes).await?;
        return Ok(Json(UploadResponse {
            success: true,
            message: "File uploaded successfully".to_string(),
            file_name: Some(stored.key),
            file_size: Some(stored.size),
        }));
    }

    Err(AppError::BadRequest(
        "No file uploaded or file is empty".to_string(),
    ))
}

/// GET /api/files/download/:file_name — Return a file's bytes.
#[utoipa::path(
    get,
    path = "/api/files/download/{file_name}",
    params(("file_name" = String, Path, description = "Storage key")),
    responses(
        (status = 200, description = "File content with resolved content type"),
        (status = 404, description = "File not found", body = StatusResponse),
        (status = 503, description = "Backing store fault", body = StatusResponse),
    ),
    tag = "files"
)]
pub(crate) async fn download_file(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<Response, AppError> {
    let object = state
        .store
        .get(&file_name)
        .await?
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        object.key.replace('"', "\\\"")
    );
    Ok((
        [
            (header::CONTENT_TYPE, object.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        object.bytes,
    )
        .into_response())
}

/// GET /api/files/list — List all stored files, most recent first.
#[utoipa::path(
    get,
    path = "/api/files/list",
    responses(
        (status = 200, description = "Stored files, most recent first", body = FileListResponse),
    ),
    tag = "files"
)]
pub(crate) async fn list_files(State(state): State<AppState>) -> Json<FileListResponse> {
    let data: Vec<FileInfo> = state
        .store
        .list()
        .await
        .into_iter()
        .map(FileInfo::from)
        .collect();
    Json(FileListResponse {
        success: true,
        message: "Files retrieved successfully".to_string(),
        data,
    })
}

/// DELETE /api/files/delete/:file_name — Remove a file.
#[utoipa::path(
    delete,
    path = "/api/files/delete/{file_name}",
    params(("file_name" = String, Path, description = "Storage key")),
    responses(
        (status = 200, description = "File deleted", body = StatusResponse),
        (status = 404, description = "File not found", body = StatusResponse),
        (status = 503, description = "Backing store fault", body = StatusResponse),
    ),
    tag = "files"
)]
pub(crate) async fn delete_file(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<Json<StatusResponse>, AppError> {
    if state.store.delete(&file_name).await? {
        Ok(Json(StatusResponse {
            success: true,
            message: "File deleted successfully".to_string(),
        }))
    } else {
        Err(AppError::NotFound("File not found".to_string()))
    }
}

/// GET /api/files/health — Liveness probe with server timestamp.
#[utoipa::path(
    get,
    path = "/api/files/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse),
    ),
    tag = "files"
)]
pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "File service is running".to_string(),
        timestamp: Utc::now(),
    })
}
