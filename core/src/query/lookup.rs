// tabula/src/query/lookup.rs

//! Per-snapshot join index.
//!
//! The store has no foreign-key awareness; a cross-entity view fetches the
//! referenced collection once, builds a `Lookup` from it, and resolves each
//! reference in O(1) instead of rescanning the array per record. Dangling
//! references resolve to `None` and are tolerated by design of the data
//! model, not silently faked with placeholder objects.

use std::collections::HashMap;
use uuid::Uuid;

use crate::store::entity::Entity;

/// An id-keyed index over one fetched collection snapshot.
#[derive(Debug, Clone)]
pub struct Lookup<T: Entity> {
  by_id: HashMap<Uuid, T>,
}

impl<T: Entity> Lookup<T> {
  pub fn from_records(records: Vec<T>) -> Self {
    let by_id = records.into_iter().map(|record| (record.id(), record)).collect();
    Self { by_id }
  }

  pub fn get(&self, id: Uuid) -> Option<&T> {
    self.by_id.get(&id)
  }

  /// Clones the referenced record out of the snapshot, `None` when dangling.
  pub fn resolve(&self, id: Uuid) -> Option<T> {
    self.by_id.get(&id).cloned()
  }

  pub fn contains(&self, id: Uuid) -> bool {
    self.by_id.contains_key(&id)
  }

  pub fn len(&self) -> usize {
    self.by_id.len()
  }

  pub fn is_empty(&self) -> bool {
    self.by_id.is_empty()
  }
}

impl<T: Entity> FromIterator<T> for Lookup<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::from_records(iter.into_iter().collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{DateTime, Utc};
  use serde::{Deserialize, Serialize};

  #[derive(Clone, Debug, Serialize, Deserialize)]
  struct Row {
    id: Uuid,
    updated_at: DateTime<Utc>,
  }

  impl Entity for Row {
    const COLLECTION: &'static str = "rows";

    fn id(&self) -> Uuid {
      self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
      self.updated_at = at;
    }
  }

  fn row() -> Row {
    Row {
      id: Uuid::new_v4(),
      updated_at: Utc::now(),
    }
  }

  #[test]
  fn resolves_known_ids_and_tolerates_dangling_ones() {
    let rows = vec![row(), row()];
    let first = rows[0].id;
    let lookup: Lookup<Row> = rows.into_iter().collect();

    assert_eq!(lookup.len(), 2);
    assert!(lookup.contains(first));
    assert!(lookup.get(first).is_some());
    assert_eq!(lookup.resolve(first).map(|r| r.id), Some(first));

    let dangling = Uuid::new_v4();
    assert!(!lookup.contains(dangling));
    assert!(lookup.resolve(dangling).is_none());
  }

  #[test]
  fn empty_snapshot_is_empty() {
    let lookup = Lookup::<Row>::from_records(Vec::new());
    assert!(lookup.is_empty());
  }
}
