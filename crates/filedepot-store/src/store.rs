//! The filesystem-backed object store.
//!
//! [`FileStore`] owns a single flat backing directory. Each stored object's
//! on-disk name equals its storage key, so a directory listing is the
//! complete namespace. All mutation goes through the filesystem's atomic
//! rename/unlink primitives; no locks are held across operations and the
//! store is freely cloneable into concurrent tasks.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use uuid::Uuid;

use crate::content_type::resolve_content_type;
use crate::error::{StoreError, StoreResult};
use crate::key::{is_valid_key, storage_key};

/// Default maximum object size: 100 MiB.
pub const DEFAULT_MAX_OBJECT_BYTES: u64 = 100 * 1024 * 1024;

/// Summary of a stored object, as reported by put and list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredObject {
    /// The storage key; unique within the namespace and equal to the
    /// object's on-disk file name.
    pub key: String,
    /// Object size in bytes.
    pub size: u64,
    /// Creation timestamp (UTC).
    pub created_at: DateTime<Utc>,
    /// MIME type resolved from the key's extension.
    pub content_type: String,
}

/// A retrieved object: full content plus download metadata.
#[derive(Debug, Clone)]
pub struct RetrievedObject {
    /// The storage key, returned as the filename hint.
    pub key: String,
    /// The complete object content.
    pub bytes: Vec<u8>,
    /// MIME type resolved from the key's extension.
    pub content_type: String,
}

/// Flat object store over a backing directory.
///
/// Cheap to clone (a path and a size cap); clones share the namespace.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    max_size: u64,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if absent.
    ///
    /// `max_size` caps the size of a single object in bytes.
    pub async fn open(root: impl Into<PathBuf>, max_size: u64) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        Ok(Self { root, max_size })
    }

    /// The backing directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The configured maximum object size in bytes.
    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Store an upload under a freshly generated storage key.
    ///
    /// The bytes are staged in a dot-prefixed temp file and published with
    /// an atomic rename, so a concurrent [`get`](Self::get) or
    /// [`list`](Self::list) never observes a partially written object. On
    /// any I/O failure the temp file is removed and no object is created.
    pub async fn put(&self, original_name: &str, bytes: &[u8]) -> StoreResult<StoredObject> {
        let size = bytes.len() as u64;
        if size == 0 {
            return Err(StoreError::EmptyUpload);
        }
        if size > self.max_size {
            return Err(StoreError::PayloadTooLarge {
                size,
                max: self.max_size,
            });
        }

        let key = storage_key(original_name);
        let staging = self.root.join(format!(".put-{}.tmp", Uuid::new_v4()));
        let published = self.root.join(&key);

        if let Err(err) = fs::write(&staging, bytes).await {
            let _ = fs::remove_file(&staging).await;
            return Err(err.into());
        }
        if let Err(err) = fs::rename(&staging, &published).await {
            let _ = fs::remove_file(&staging).await;
            return Err(err.into());
        }

        // Report the filesystem's timestamp so put and list agree on
        // created_at for the same key. The fallback covers a concurrent
        // delete racing the stat.
        let created_at = match fs::metadata(&published).await {
            Ok(metadata) => created_at_of(&metadata),
            Err(_) => Utc::now(),
        };

        tracing::info!(key = %key, size, "object stored");
        Ok(StoredObject {
            content_type: resolve_content_type(&key).to_string(),
            key,
            size,
            created_at,
        })
    }

    /// Retrieve an object by storage key.
    ///
    /// Returns `Ok(None)` when the key is absent or could never name a
    /// stored object (path separators, temp-file prefix). I/O failures
    /// other than not-found surface as [`StoreError::Unavailable`].
    pub async fn get(&self, key: &str) -> StoreResult<Option<RetrievedObject>> {
        if !is_valid_key(key) {
            return Ok(None);
        }
        let path = self.root.join(key);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(RetrievedObject {
                key: key.to_string(),
                content_type: resolve_content_type(key).to_string(),
                bytes,
            })),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            // A directory is not an object; the namespace treats it as
            // absent, matching what list reports.
            Err(_) if is_directory(&path).await => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Enumerate every object in the namespace, most recent first.
    ///
    /// An inaccessible backing store yields an empty list rather than an
    /// error; the fault is logged since the interface alone cannot
    /// distinguish it from an empty namespace.
    pub async fn list(&self) -> Vec<StoredObject> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(root = %self.root.display(), error = %err, "backing store unreadable; reporting empty namespace");
                return Vec::new();
            }
        };

        let mut objects = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(err) => {
                    tracing::warn!(root = %self.root.display(), error = %err, "directory enumeration aborted");
                    break;
                }
            };

            let key = entry.file_name().to_string_lossy().into_owned();
            // Unpublished temp files and foreign entries are not objects.
            if !is_valid_key(&key) {
                continue;
            }
            let metadata = match entry.metadata().await {
                Ok(metadata) if metadata.is_file() => metadata,
                Ok(_) => continue,
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            objects.push(StoredObject {
                content_type: resolve_content_type(&key).to_string(),
                size: metadata.len(),
                created_at: created_at_of(&metadata),
                key,
            });
        }

        objects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        objects
    }

    /// Remove an object by storage key.
    ///
    /// Returns `Ok(true)` when the object existed and was removed,
    /// `Ok(false)` when the key was absent or invalid (namespace untouched),
    /// and [`StoreError::Unavailable`] when removal itself failed — a
    /// deliberate split of the reference behavior that conflated the two.
    pub async fn delete(&self, key: &str) -> StoreResult<bool> {
        if !is_valid_key(key) {
            return Ok(false);
        }
        let path = self.root.join(key);
        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(key = %key, "object deleted");
                Ok(true)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            // Directories are never objects; leave them untouched and
            // report not-found rather than a retryable fault.
            Err(_) if is_directory(&path).await => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

/// Creation timestamp of a filesystem entry, falling back to the
/// modification time on filesystems that do not track birth time.
fn created_at_of(metadata: &std::fs::Metadata) -> DateTime<Utc> {
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now())
}

/// Whether `path` currently resolves to a directory.
async fn is_directory(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false)
}
