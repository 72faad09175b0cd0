// tabula/src/store/repository.rs

//! The generic repository: whole-collection CRUD over one storage slot.
//!
//! Every operation materializes the full collection (a JSON array under
//! `T::COLLECTION`), works on it in memory with linear scans, and writes the
//! whole array back on mutation. That is the intended contract: collections
//! are small, there is no indexing, and "last write wins" is the accepted
//! concurrency story. What the repository does NOT do is swallow failures: a
//! corrupt slot or a backend fault surfaces as a `StoreError` so callers can
//! tell "genuinely empty" apart from "read failed".

use chrono::Utc;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, instrument, trace};
use uuid::Uuid;

use crate::backend::StorageBackend;
use crate::error::{StoreError, StoreResult};
use crate::query::page::{paginate, Page, PageRequest, SortDirection};
use crate::store::entity::{Entity, Searchable};

/// Read-only record predicate used by filtering and pagination.
pub type Predicate<'a, T> = &'a dyn Fn(&T) -> bool;

/// Record comparator for single-field sorts. Always written in ascending
/// terms; `SortDirection::Descending` reverses it.
pub type Comparator<'a, T> = &'a dyn Fn(&T, &T) -> std::cmp::Ordering;

/// A typed repository over one entity collection.
///
/// Repositories are cheap to clone; clones share the injected backend.
pub struct Repository<T: Entity> {
  backend: Arc<dyn StorageBackend>,
  _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Clone for Repository<T> {
  fn clone(&self) -> Self {
    Self {
      backend: Arc::clone(&self.backend),
      _entity: PhantomData,
    }
  }
}

impl<T: Entity> std::fmt::Debug for Repository<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Repository")
      .field("collection", &T::COLLECTION)
      .finish()
  }
}

impl<T: Entity> Repository<T> {
  /// Creates a repository over the given backend. The backend is explicitly
  /// injected rather than reached for as an ambient singleton.
  pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
    Self {
      backend,
      _entity: PhantomData,
    }
  }

  /// The full materialized collection. An absent slot is an empty
  /// collection; a slot that fails to parse is `StoreError::Corrupt`.
  pub fn all(&self) -> StoreResult<Vec<T>> {
    match self.backend.load(T::COLLECTION)? {
      None => Ok(Vec::new()),
      Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
        collection: T::COLLECTION,
        source,
      }),
    }
  }

  /// First record with a matching id, if any. Linear scan, O(n).
  pub fn find(&self, id: Uuid) -> StoreResult<Option<T>> {
    Ok(self.all()?.into_iter().find(|record| record.id() == id))
  }

  /// Appends a record and persists the collection. Fails with
  /// `StoreError::DuplicateId` when the id is already taken.
  #[instrument(name = "repository::insert", skip_all, fields(collection = T::COLLECTION), err(Display))]
  pub fn insert(&self, record: T) -> StoreResult<()> {
    let mut records = self.all()?;
    let id = record.id();
    if records.iter().any(|existing| existing.id() == id) {
      return Err(StoreError::DuplicateId {
        collection: T::COLLECTION,
        id,
      });
    }
    records.push(record);
    self.persist(&records)?;
    debug!(%id, total = records.len(), "record inserted");
    Ok(())
  }

  /// Applies `mutate` to the matching record, stamps its modification time,
  /// and persists. Returns the updated record, or `StoreError::NotFound`.
  ///
  /// Partial updates are expressed as a typed mutation closure rather than a
  /// duck-typed field map, so a caller can only touch fields that exist.
  #[instrument(name = "repository::update", skip_all, fields(collection = T::COLLECTION, %id), err(Display))]
  pub fn update<F>(&self, id: Uuid, mutate: F) -> StoreResult<T>
  where
    F: FnOnce(&mut T),
  {
    let mut records = self.all()?;
    let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
      return Err(StoreError::NotFound {
        collection: T::COLLECTION,
        id,
      });
    };
    mutate(record);
    record.touch(Utc::now());
    let updated = record.clone();
    self.persist(&records)?;
    Ok(updated)
  }

  /// Removes the matching record. Returns `false` when nothing matched
  /// (a no-op, not an error).
  #[instrument(name = "repository::delete", skip_all, fields(collection = T::COLLECTION, %id), err(Display))]
  pub fn delete(&self, id: Uuid) -> StoreResult<bool> {
    let mut records = self.all()?;
    let before = records.len();
    records.retain(|record| record.id() != id);
    if records.len() == before {
      trace!("delete matched nothing");
      return Ok(false);
    }
    self.persist(&records)?;
    Ok(true)
  }

  /// All records satisfying the caller-supplied predicate.
  pub fn filtered(&self, predicate: Predicate<'_, T>) -> StoreResult<Vec<T>> {
    Ok(self.all()?.into_iter().filter(|record| predicate(record)).collect())
  }

  /// Number of records currently stored.
  pub fn count(&self) -> StoreResult<usize> {
    Ok(self.all()?.len())
  }

  /// Batch fetch by id. Output preserves the input order; dangling ids are
  /// skipped silently (the store has no referential integrity to offer).
  pub fn get_many(&self, ids: &[Uuid]) -> StoreResult<Vec<T>> {
    let records = self.all()?;
    Ok(
      ids
        .iter()
        .filter_map(|id| records.iter().find(|record| record.id() == *id).cloned())
        .collect(),
    )
  }

  /// Filter (optional), sort (optional), then slice one 1-indexed page.
  ///
  /// `sort` takes an ascending comparator plus the requested direction; ties
  /// keep their relative order (`sort_by` is stable).
  pub fn page(
    &self,
    request: &PageRequest,
    predicate: Option<Predicate<'_, T>>,
    sort: Option<(Comparator<'_, T>, SortDirection)>,
  ) -> StoreResult<Page<T>> {
    let mut records = match predicate {
      Some(predicate) => self.filtered(predicate)?,
      None => self.all()?,
    };
    if let Some((comparator, direction)) = sort {
      records.sort_by(|a, b| match direction {
        SortDirection::Ascending => comparator(a, b),
        SortDirection::Descending => comparator(b, a),
      });
    }
    paginate(records, request)
  }

  fn persist(&self, records: &[T]) -> StoreResult<()> {
    let payload = serde_json::to_string(records).map_err(|source| StoreError::Serialize {
      collection: T::COLLECTION,
      source,
    })?;
    self.backend.store(T::COLLECTION, &payload)
  }
}

impl<T: Searchable> Repository<T> {
  /// Case-insensitive substring match of `query` against the named
  /// string-typed fields. An empty (or all-whitespace) query yields an empty
  /// result, not the whole collection.
  pub fn search(&self, query: &str, fields: &[&str]) -> StoreResult<Vec<T>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
      return Ok(Vec::new());
    }
    Ok(
      self
        .all()?
        .into_iter()
        .filter(|record| {
          fields.iter().any(|field| {
            record
              .text_field(field)
              .is_some_and(|value| value.to_lowercase().contains(&needle))
          })
        })
        .collect(),
    )
  }
}
