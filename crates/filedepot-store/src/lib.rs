#![deny(missing_docs)]

//! # filedepot-store — Flat Object Store over a Backing Directory
//!
//! This crate is the storage core of filedepot. It maps client-supplied
//! upload bytes to durable, uniquely-named objects in a single flat
//! directory, and resolves, enumerates, and removes those objects safely.
//! It has no HTTP dependencies — only `tokio`, `serde`, `thiserror`,
//! `chrono`, `uuid`, and `tracing` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **The directory is the namespace.** There is no manifest or in-memory
//!    index; every object's on-disk name equals its storage key, and a
//!    directory listing is the source of truth. The store is self-healing
//!    after a crash — whatever was published is exactly what exists.
//!
//! 2. **Write-then-publish.** [`FileStore::put`] stages bytes in a
//!    dot-prefixed temp file and atomically renames it to the final key.
//!    Concurrent readers never observe a half-written object, and key
//!    validation keeps in-flight temp files unresolvable.
//!
//! 3. **Collision-free keys.** Every storage key embeds a fresh UUID v4
//!    ahead of the sanitized client file name, so two concurrent uploads of
//!    `report.pdf` produce two distinct objects.
//!
//! 4. **[`StoreError`] taxonomy.** Structured errors with `thiserror`.
//!    "Not found" is a normal outcome expressed as `Option`/`bool`, never
//!    an error variant.

pub mod content_type;
pub mod error;
pub mod key;
pub mod store;

pub use content_type::resolve_content_type;
pub use error::{StoreError, StoreResult};
pub use key::{is_valid_key, sanitize_file_name, storage_key};
pub use store::{FileStore, RetrievedObject, StoredObject, DEFAULT_MAX_OBJECT_BYTES};
