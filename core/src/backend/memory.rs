// tabula/src/backend/memory.rs

//! In-memory backend. The default for tests and the single-process case.

use parking_lot::RwLock;
use std::collections::HashMap;

use super::{validate_key, StorageBackend};
use crate::error::StoreResult;

/// Keeps every slot in a `parking_lot::RwLock<HashMap<..>>`.
///
/// Guards are blocking and are never held across an `.await` point; every
/// trait method acquires and releases its lock within the call.
#[derive(Debug, Default)]
pub struct MemoryBackend {
  slots: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
  pub fn new() -> Self {
    Self::default()
  }
}

impl StorageBackend for MemoryBackend {
  fn load(&self, key: &str) -> StoreResult<Option<String>> {
    validate_key(key)?;
    Ok(self.slots.read().get(key).cloned())
  }

  fn store(&self, key: &str, payload: &str) -> StoreResult<()> {
    validate_key(key)?;
    self.slots.write().insert(key.to_string(), payload.to_string());
    Ok(())
  }

  fn delete(&self, key: &str) -> StoreResult<()> {
    validate_key(key)?;
    self.slots.write().remove(key);
    Ok(())
  }

  fn keys(&self) -> StoreResult<Vec<String>> {
    Ok(self.slots.read().keys().cloned().collect())
  }
}
