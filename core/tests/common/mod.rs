// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::Level;
use uuid::Uuid;

use tabula::{Entity, MemoryBackend, Repository, Searchable, StorageBackend};

// --- Fixture entity ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Widget {
  pub id: Uuid,
  pub name: String,
  pub city: String,
  pub quantity: i64,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Widget {
  pub fn new(name: &str, city: &str, quantity: i64) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      name: name.to_string(),
      city: city.to_string(),
      quantity,
      created_at: now,
      updated_at: now,
    }
  }
}

impl Entity for Widget {
  const COLLECTION: &'static str = "widgets";

  fn id(&self) -> Uuid {
    self.id
  }

  fn touch(&mut self, at: DateTime<Utc>) {
    self.updated_at = at;
  }
}

impl Searchable for Widget {
  fn text_field(&self, field: &str) -> Option<String> {
    match field {
      "name" => Some(self.name.clone()),
      "city" => Some(self.city.clone()),
      _ => None,
    }
  }
}

// --- Repository helpers ---

pub fn memory_backend() -> Arc<dyn StorageBackend> {
  Arc::new(MemoryBackend::new())
}

pub fn widget_repo() -> Repository<Widget> {
  Repository::new(memory_backend())
}

pub fn seeded_repo(widgets: &[(&str, &str, i64)]) -> Repository<Widget> {
  let repo = widget_repo();
  for (name, city, quantity) in widgets {
    repo.insert(Widget::new(name, city, *quantity)).unwrap();
  }
  repo
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
