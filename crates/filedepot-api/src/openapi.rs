//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the files API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "filedepot API",
        version = "0.1.0",
        description = "Flat file store over HTTP: upload, list, download, and delete uniquely-named binary objects.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::files::upload_file,
        crate::routes::files::download_file,
        crate::routes::files::list_files,
        crate::routes::files::delete_file,
        crate::routes::files::health,
    ),
    components(schemas(
        crate::models::UploadResponse,
        crate::models::FileInfo,
        crate::models::FileListResponse,
        crate::models::StatusResponse,
        crate::models::HealthResponse,
    )),
    tags(
        (name = "files", description = "File storage operations"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
