// src/lib.rs

//! Tabula: a synchronous, pluggable, type-safe entity store and query layer.
//!
//! Tabula persists typed collections as JSON arrays, one per storage slot,
//! behind an injected backend:
//!  - Whole-collection CRUD with explicit `StoreError` results: a corrupt
//!    slot is a surfaced error, never a silently empty collection.
//!  - One `Repository<T>` per concrete entity type; no stringly-typed
//!    dispatch over a shared entity map.
//!  - Case-insensitive substring search over named string fields.
//!  - Filtering, single-field sorting, and 1-indexed pagination.
//!  - Per-snapshot `Lookup` indexes for resolving cross-entity references.
//!  - A schema-version guard that wipes and reinitializes on mismatch.
//!
//! The store itself does no real I/O scheduling and holds no locks across
//! operations; backends are free to block briefly. Collections are expected
//! to be small (tens to hundreds of records), so every operation is a linear
//! scan over the materialized array and every mutation rewrites the whole
//! serialized collection. "Last write wins" is the documented concurrency
//! contract.

pub mod backend;
pub mod error;
pub mod query;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::backend::{FileBackend, MemoryBackend, StorageBackend};
pub use crate::error::{StoreError, StoreResult};
pub use crate::query::{paginate, Lookup, Page, PageRequest, SortDirection};
pub use crate::store::{Entity, Repository, SchemaGuard, Searchable};
pub use crate::store::repository::{Comparator, Predicate};

/*
    Core workflow:
    1. Define a record struct and implement `Entity` (and `Searchable` if it
       participates in text search).
    2. Open a backend (`MemoryBackend::new()` or `FileBackend::open(dir)?`)
       and wrap it in an `Arc`.
    3. Run `SchemaGuard::ensure(&backend, "1.0")?` once at startup.
    4. Hand each entity type its own `Repository::new(backend.clone())`.
    5. Read with `all` / `find` / `filtered` / `search` / `page`; mutate with
       `insert` / `update` / `delete`.
    6. For cross-entity views, fetch the referenced collection once and build
       a `Lookup` to resolve foreign keys per snapshot.
*/
