// tabula/src/backend/mod.rs

//! Pluggable slot storage behind the store.
//!
//! A backend is a flat map from a slot key to one serialized payload. The
//! repository layer never touches files or memory directly; it is handed an
//! `Arc<dyn StorageBackend>` and works against this trait, so tests can swap
//! in `MemoryBackend` without touching any global state.

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::error::{StoreError, StoreResult};

/// A keyed slot store. One slot holds one serialized collection.
///
/// Implementations must be safe to share across threads; the store keeps a
/// single `Arc<dyn StorageBackend>` per repository family.
pub trait StorageBackend: Send + Sync {
  /// Returns the payload stored under `key`, or `None` when the slot is absent.
  fn load(&self, key: &str) -> StoreResult<Option<String>>;

  /// Replaces the payload stored under `key`.
  fn store(&self, key: &str, payload: &str) -> StoreResult<()>;

  /// Removes the slot. Removing an absent slot is a no-op, not an error.
  fn delete(&self, key: &str) -> StoreResult<()>;

  /// Lists every populated slot key, in no particular order.
  fn keys(&self) -> StoreResult<Vec<String>>;
}

/// Slot keys double as file names in `FileBackend`, so the accepted alphabet
/// is restricted up front for every backend.
pub(crate) fn validate_key(key: &str) -> StoreResult<()> {
  let acceptable =
    |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-';
  if key.is_empty() || !key.chars().all(acceptable) {
    return Err(StoreError::InvalidKey(key.to_string()));
  }
  Ok(())
}
