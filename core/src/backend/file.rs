// tabula/src/backend/file.rs

//! File-per-slot backend: each slot key maps to `<root>/<key>.json`.

use anyhow::Context;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{validate_key, StorageBackend};
use crate::error::{StoreError, StoreResult};

const SLOT_EXTENSION: &str = "json";

/// Stores each slot as a UTF-8 JSON file under one root directory.
///
/// Writes go to a sibling temp file first and are moved into place with a
/// rename, so a crashed write leaves the previous payload intact rather than
/// a half-written slot. There is no cross-process locking: concurrent writers
/// race read-modify-write on whole slots and the last write wins, which
/// matches the store's single-logical-writer contract.
#[derive(Debug, Clone)]
pub struct FileBackend {
  root: PathBuf,
}

impl FileBackend {
  /// Opens (creating if necessary) the backing directory.
  pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
    let root = root.into();
    fs::create_dir_all(&root)
      .with_context(|| format!("creating storage directory {}", root.display()))
      .map_err(|source| StoreError::Backend { source })?;
    debug!(root = %root.display(), "file backend opened");
    Ok(Self { root })
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  fn slot_path(&self, key: &str) -> PathBuf {
    self.root.join(format!("{key}.{SLOT_EXTENSION}"))
  }
}

impl StorageBackend for FileBackend {
  fn load(&self, key: &str) -> StoreResult<Option<String>> {
    validate_key(key)?;
    match fs::read_to_string(self.slot_path(key)) {
      Ok(payload) => Ok(Some(payload)),
      Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(err) => Err(StoreError::Backend {
        source: anyhow::Error::new(err).context(format!("reading slot '{key}'")),
      }),
    }
  }

  fn store(&self, key: &str, payload: &str) -> StoreResult<()> {
    validate_key(key)?;
    let target = self.slot_path(key);
    let staging = self.root.join(format!("{key}.{SLOT_EXTENSION}.tmp"));
    fs::write(&staging, payload)
      .with_context(|| format!("staging slot '{key}'"))
      .map_err(|source| StoreError::Backend { source })?;
    fs::rename(&staging, &target)
      .with_context(|| format!("committing slot '{key}'"))
      .map_err(|source| StoreError::Backend { source })?;
    Ok(())
  }

  fn delete(&self, key: &str) -> StoreResult<()> {
    validate_key(key)?;
    match fs::remove_file(self.slot_path(key)) {
      Ok(()) => Ok(()),
      Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
      Err(err) => Err(StoreError::Backend {
        source: anyhow::Error::new(err).context(format!("deleting slot '{key}'")),
      }),
    }
  }

  fn keys(&self) -> StoreResult<Vec<String>> {
    let entries = fs::read_dir(&self.root)
      .with_context(|| format!("listing storage directory {}", self.root.display()))
      .map_err(|source| StoreError::Backend { source })?;

    let mut keys = Vec::new();
    for entry in entries {
      let entry = entry
        .context("reading storage directory entry")
        .map_err(|source| StoreError::Backend { source })?;
      let path = entry.path();
      if path.extension().and_then(|ext| ext.to_str()) != Some(SLOT_EXTENSION) {
        continue;
      }
      if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
        if validate_key(stem).is_ok() {
          keys.push(stem.to_string());
        }
      }
    }
    Ok(keys)
  }
}
