// core/examples/basic_store.rs
//
// Minimal tour of the store: define an entity, open a backend, run the
// schema guard, and exercise CRUD, search, and pagination.
//
// Run with: cargo run --example basic_store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use tabula::{
  Entity, MemoryBackend, PageRequest, Repository, SchemaGuard, Searchable, SortDirection,
  StorageBackend, StoreResult,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Tool {
  id: Uuid,
  name: String,
  city: String,
  quantity: i64,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl Tool {
  fn new(name: &str, city: &str, quantity: i64) -> Self {
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

impl Entity for Tool {
  const COLLECTION: &'static str = "tools";

  fn id(&self) -> Uuid {
    self.id
  }

  fn touch(&mut self, at: DateTime<Utc>) {
    self.updated_at = at;
  }
}

impl Searchable for Tool {
  fn text_field(&self, field: &str) -> Option<String> {
    match field {
      "name" => Some(self.name.clone()),
      "city" => Some(self.city.clone()),
      _ => None,
    }
  }
}

fn main() -> StoreResult<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tabula=debug".into()),
    )
    .init();

  let backend: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());
  SchemaGuard::ensure(&backend, "1.0")?;

  let tools: Repository<Tool> = Repository::new(backend);

  let rake = Tool::new("garden rake", "Berlin", 4);
  let rake_id = rake.id;
  tools.insert(rake)?;
  tools.insert(Tool::new("hoe", "Munich", 2))?;
  tools.insert(Tool::new("spade", "Berlin", 7))?;

  let updated = tools.update(rake_id, |tool| tool.quantity = 6)?;
  println!("updated quantity: {} (at {})", updated.quantity, updated.updated_at);

  let berlin_hits = tools.search("berlin", &["city"])?;
  println!("search 'berlin' -> {} records", berlin_hits.len());

  let by_quantity = |a: &Tool, b: &Tool| a.quantity.cmp(&b.quantity);
  let page = tools.page(
    &PageRequest::new(1, 2),
    None,
    Some((&by_quantity, SortDirection::Descending)),
  )?;
  println!(
    "page {}/{} ({} total): {:?}",
    page.page,
    page.total_pages,
    page.total,
    page.items.iter().map(|t| t.name.as_str()).collect::<Vec<_>>()
  );

  let removed = tools.delete(rake_id)?;
  println!("removed rake: {removed}");

  Ok(())
}
