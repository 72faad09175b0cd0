// tabula/src/store/schema.rs

//! Startup schema-version guard.
//!
//! The on-disk format carries no migration machinery, only a single version
//! string in a reserved slot. On open, a missing or mismatched version wipes
//! every slot and records the running version; callers that want their data
//! to survive a format change must bump deliberately.

use std::sync::Arc;
use tracing::{info, instrument};

use crate::backend::StorageBackend;
use crate::error::StoreResult;

/// Reserved slot holding the schema version string.
pub const SCHEMA_SLOT: &str = "__schema_version";

pub struct SchemaGuard;

impl SchemaGuard {
  /// Compares the stored version against `version`; wipes all slots and
  /// records `version` on mismatch or absence. Returns `true` when a wipe
  /// discarded pre-existing data.
  #[instrument(name = "schema_guard::ensure", skip(backend), err(Display))]
  pub fn ensure(backend: &Arc<dyn StorageBackend>, version: &str) -> StoreResult<bool> {
    if let Some(stored) = backend.load(SCHEMA_SLOT)? {
      if stored == version {
        return Ok(false);
      }
      info!(stored = %stored, expected = %version, "schema version mismatch, wiping store");
    }

    let mut wiped = false;
    for key in backend.keys()? {
      if key != SCHEMA_SLOT {
        wiped = true;
      }
      backend.delete(&key)?;
    }
    backend.store(SCHEMA_SLOT, version)?;
    Ok(wiped)
  }
}
