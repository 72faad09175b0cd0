// tabula/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Storage backend failure. Source: {source}")]
  Backend {
    #[source]
    source: AnyhowError,
  },

  #[error("Collection '{collection}' does not deserialize as a JSON array. Source: {source}")]
  Corrupt {
    collection: &'static str,
    #[source]
    source: serde_json::Error,
  },

  #[error("Failed to serialize collection '{collection}'. Source: {source}")]
  Serialize {
    collection: &'static str,
    #[source]
    source: serde_json::Error,
  },

  #[error("Duplicate id {id} in collection '{collection}'")]
  DuplicateId { collection: &'static str, id: Uuid },

  #[error("No record with id {id} in collection '{collection}'")]
  NotFound { collection: &'static str, id: Uuid },

  #[error("Invalid storage key: '{0}'")]
  InvalidKey(String),

  #[error("Invalid page request: {0}")]
  InvalidPage(String),
}

// The key conversion for external backend errors: anything an implementor
// bubbles up through anyhow lands in `StoreError::Backend`.
impl From<AnyhowError> for StoreError {
  fn from(err: AnyhowError) -> Self {
    StoreError::Backend { source: err }
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
