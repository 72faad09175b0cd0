// marketplace/src/state.rs

use std::sync::Arc;
use tracing::{info, warn};

use tabula::{FileBackend, MemoryBackend, Repository, SchemaGuard, StorageBackend};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::{Booking, Category, Conversation, Listing, Message, Profile, Review, User};
use crate::seed;

/// The application's data layer: one repository per entity, all sharing one
/// explicitly-injected backend. Cheap to clone; clones share the backend.
#[derive(Clone)]
pub struct Marketplace {
  pub users: Repository<User>,
  pub profiles: Repository<Profile>,
  pub listings: Repository<Listing>,
  pub bookings: Repository<Booking>,
  pub conversations: Repository<Conversation>,
  pub messages: Repository<Message>,
  pub reviews: Repository<Review>,
  pub categories: Repository<Category>,
  pub config: Arc<AppConfig>,
}

impl Marketplace {
  /// Opens the backend named by the config (file-backed when a storage dir
  /// is set, otherwise in-memory), runs the schema guard, and seeds the
  /// category taxonomy.
  pub fn open(config: AppConfig) -> Result<Self> {
    let backend: Arc<dyn StorageBackend> = match &config.storage_dir {
      Some(dir) => Arc::new(FileBackend::open(dir.clone())?),
      None => Arc::new(MemoryBackend::new()),
    };
    Self::open_with_backend(config, backend)
  }

  /// Opens over a caller-supplied backend. Tests inject a `MemoryBackend`
  /// here without touching any global.
  pub fn open_with_backend(config: AppConfig, backend: Arc<dyn StorageBackend>) -> Result<Self> {
    let wiped = SchemaGuard::ensure(&backend, &config.schema_version)?;
    if wiped {
      warn!(version = %config.schema_version, "schema version changed, store was wiped and reinitialized");
    }

    let marketplace = Self {
      users: Repository::new(Arc::clone(&backend)),
      profiles: Repository::new(Arc::clone(&backend)),
      listings: Repository::new(Arc::clone(&backend)),
      bookings: Repository::new(Arc::clone(&backend)),
      conversations: Repository::new(Arc::clone(&backend)),
      messages: Repository::new(Arc::clone(&backend)),
      reviews: Repository::new(Arc::clone(&backend)),
      categories: Repository::new(Arc::clone(&backend)),
      config: Arc::new(config),
    };

    seed::seed_categories(&marketplace)?;
    if marketplace.config.seed_demo_data {
      seed::seed_demo_records(&marketplace)?;
    }
    info!("marketplace data layer opened");
    Ok(marketplace)
  }

  /// In-memory marketplace with zero latency. Test and example convenience.
  pub fn in_memory() -> Result<Self> {
    Self::open(AppConfig::in_memory())
  }
}
