//! # filedepot-api — Axum HTTP Surface for the filedepot Object Store
//!
//! Thin HTTP layer over [`filedepot_store::FileStore`]. Handlers translate
//! multipart uploads and path-addressed downloads into store operations;
//! all storage contracts (key generation, atomic publish, size caps,
//! content-type resolution) live in the store crate.
//!
//! ## API Surface
//!
//! | Route                           | Handler                     |
//! |---------------------------------|-----------------------------|
//! | `POST /api/files/upload`        | [`routes::files`] upload    |
//! | `GET /api/files/download/:name` | [`routes::files`] download  |
//! | `GET /api/files/list`           | [`routes::files`] list      |
//! | `DELETE /api/files/delete/:name`| [`routes::files`] delete    |
//! | `GET /api/files/health`         | [`routes::files`] health    |
//! | `GET /openapi.json`             | [`openapi`]                 |
//!
//! ## Middleware Stack (Tower)
//!
//! TraceLayer → CorsLayer (permissive) → DefaultBodyLimit → Handler

pub mod error;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Slack added to the transport body limit on top of the object size cap,
/// covering multipart boundaries and part headers. The store's own cap is
/// authoritative for the object bytes themselves.
const MULTIPART_OVERHEAD_BYTES: u64 = 64 * 1024;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let body_limit = usize::try_from(
        state
            .config
            .max_upload_bytes
            .saturating_add(MULTIPART_OVERHEAD_BYTES),
    )
    .unwrap_or(usize::MAX);

    Router::new()
        .merge(routes::files::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
