// marketplace/src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tabula::{Entity, Searchable};

/// What a user can do on the platform. A user may hold both roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
  Host,
  Helper,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
  pub id: Uuid,
  pub email: String,
  // Argon2 hash string. The collection round-trips through serde, so the
  // hash stays serialized here; API callers receive the whole record and the
  // stored payload never leaves the local backend.
  pub password_hash: String,
  pub roles: Vec<Role>,
  pub profile_id: Option<Uuid>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl User {
  pub fn new(email: &str, password_hash: String, roles: Vec<Role>) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      email: email.trim().to_lowercase(),
      password_hash,
      roles,
      profile_id: None,
      created_at: now,
      updated_at: now,
    }
  }

  pub fn has_role(&self, role: Role) -> bool {
    self.roles.contains(&role)
  }
}

impl Entity for User {
  const COLLECTION: &'static str = "users";

  fn id(&self) -> Uuid {
    self.id
  }

  fn touch(&mut self, at: DateTime<Utc>) {
    self.updated_at = at;
  }
}

impl Searchable for User {
  fn text_field(&self, field: &str) -> Option<String> {
    match field {
      "email" => Some(self.email.clone()),
      _ => None,
    }
  }
}
