// tabula/src/store/entity.rs

//! Contracts a record type must satisfy to live in a repository.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// A stored record type. One implementation per concrete entity, each with
/// its own collection slot; there is no stringly-typed dispatch over a shared
/// entity map.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
  /// The storage slot this type's collection serializes into. Must satisfy
  /// the backend key alphabet (`[a-z0-9_-]+`).
  const COLLECTION: &'static str;

  /// Stable unique identifier, enforced unique on insert.
  fn id(&self) -> Uuid;

  /// Stamps the modification time. Called by the repository on every
  /// successful update.
  fn touch(&mut self, at: DateTime<Utc>);
}

/// Named access to an entity's string-typed fields, for substring search.
///
/// Returning `None` for an unknown field name means the field simply does not
/// participate in the match; it is not an error.
pub trait Searchable: Entity {
  fn text_field(&self, field: &str) -> Option<String>;
}
