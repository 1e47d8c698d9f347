//! # Application State & Configuration
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. Holds the [`FileStore`] (the sole owner of the
//! object namespace) and the resolved configuration.

use std::path::PathBuf;

use filedepot_store::{FileStore, StoreResult, DEFAULT_MAX_OBJECT_BYTES};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Backing directory for stored objects; created at startup if absent.
    pub storage_dir: PathBuf,
    /// Maximum size of a single uploaded object in bytes.
    pub max_upload_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            storage_dir: PathBuf::from("uploads"),
            max_upload_bytes: DEFAULT_MAX_OBJECT_BYTES,
        }
    }
}

impl AppConfig {
    /// Build configuration from the environment.
    ///
    /// Reads `PORT`, `STORAGE_DIR`, and `MAX_UPLOAD_BYTES`; every variable
    /// is optional and unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            storage_dir: std::env::var("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(defaults.max_upload_bytes),
        }
    }
}

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly: [`FileStore`] is a path plus a size cap, and clones
/// share the same on-disk namespace.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The object store backing every files endpoint.
    pub store: FileStore,
    /// Resolved configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Open the backing store for `config` and assemble the state.
    ///
    /// Fails only when the backing directory cannot be created.
    pub async fn try_new(config: AppConfig) -> StoreResult<Self> {
        let store = FileStore::open(&config.storage_dir, config.max_upload_bytes).await?;
        Ok(Self { store, config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_settings() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.storage_dir, PathBuf::from("uploads"));
        assert_eq!(config.max_upload_bytes, 100 * 1024 * 1024);
    }

    #[tokio::test]
    async fn try_new_opens_store_in_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            storage_dir: dir.path().join("objects"),
            ..AppConfig::default()
        };
        let state = AppState::try_new(config).await.unwrap();
        assert!(state.config.storage_dir.is_dir());
        assert_eq!(state.store.max_size(), 100 * 1024 * 1024);
    }
}
