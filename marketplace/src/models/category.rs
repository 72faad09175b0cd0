// marketplace/src/models/category.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tabula::{Entity, Searchable};

/// Static taxonomy entry used to tag listings (required help) and profiles
/// (offered skills). Seeded at open; referenced by slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
  pub id: Uuid,
  pub slug: String,
  pub name: String,
  pub description: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Category {
  pub fn new(slug: &str, name: &str, description: &str) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      slug: slug.to_string(),
      name: name.to_string(),
      description: description.to_string(),
      created_at: now,
      updated_at: now,
    }
  }
}

impl Entity for Category {
  const COLLECTION: &'static str = "categories";

  fn id(&self) -> Uuid {
    self.id
  }

  fn touch(&mut self, at: DateTime<Utc>) {
    self.updated_at = at;
  }
}

impl Searchable for Category {
  fn text_field(&self, field: &str) -> Option<String> {
    match field {
      "slug" => Some(self.slug.clone()),
      "name" => Some(self.name.clone()),
      "description" => Some(self.description.clone()),
      _ => None,
    }
  }
}
