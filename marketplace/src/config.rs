// marketplace/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;

/// Storage format version. Bumping it wipes and reinitializes every
/// collection on the next open (there is no migration machinery).
pub const SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  /// Directory for the file backend; `None` keeps everything in memory.
  pub storage_dir: Option<String>,

  /// Fixed artificial delay applied by the API surface to emulate network
  /// latency. Not a timeout and not cancellable; attempt-once semantics.
  pub api_latency_ms: u64,

  pub schema_version: String,

  /// Seed demo records (a host, a helper, and one listing) on open.
  pub seed_demo_data: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let storage_dir = env::var("WORKSTAY_STORAGE_DIR").ok().filter(|dir| !dir.is_empty());

    let api_latency_ms = env::var("WORKSTAY_API_LATENCY_MS")
      .unwrap_or_else(|_| "300".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid WORKSTAY_API_LATENCY_MS: {}", e)))?;

    let schema_version =
      env::var("WORKSTAY_SCHEMA_VERSION").unwrap_or_else(|_| SCHEMA_VERSION.to_string());

    let seed_demo_data = env::var("WORKSTAY_SEED_DEMO")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid WORKSTAY_SEED_DEMO value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      storage_dir,
      api_latency_ms,
      schema_version,
      seed_demo_data,
    })
  }

  /// In-memory configuration with no artificial latency. The default for
  /// tests and examples.
  pub fn in_memory() -> Self {
    Self {
      storage_dir: None,
      api_latency_ms: 0,
      schema_version: SCHEMA_VERSION.to_string(),
      seed_demo_data: false,
    }
  }
}
