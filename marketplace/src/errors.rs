// marketplace/src/errors.rs

use thiserror::Error;

use tabula::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Not Permitted: {0}")]
  Forbidden(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Conflict: {0}")]
  Duplicate(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Store Error: {source}")]
  Store {
    #[from] // Allows `?` on any repository call
    source: StoreError,
  },

  #[error("Internal Error: {0}")]
  Internal(String),
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in service code that uses `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<StoreError>() {
      // We already have `From<StoreError>`, but this handles it wrapped in anyhow
      return match err.downcast::<StoreError>() {
        Ok(store_err) => AppError::Store { source: store_err },
        Err(err) => AppError::Internal(err.to_string()),
      };
    }
    AppError::Internal(err.to_string())
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
