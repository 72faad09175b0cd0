// marketplace/src/models/profile.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tabula::Entity;

/// Host-side details about the property helpers would stay at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDetails {
  pub property_type: String,
  pub max_helpers: u8,
  pub amenities: Vec<String>,
}

/// Host-side expectations for the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostingPreferences {
  pub hours_per_week: u8,
  pub days_off_per_week: u8,
  pub meals_included: bool,
}

/// One profile per user, enforced by the profile service (the storage layer
/// carries no uniqueness constraint beyond the record id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
  pub id: Uuid,
  pub user_id: Uuid,
  pub bio: String,
  pub phone: Option<String>,
  pub address: Option<String>,
  pub languages: Vec<String>,
  /// Category slugs the user can help with (helper side).
  pub skills: Vec<String>,
  pub available_from: Option<NaiveDate>,
  pub available_until: Option<NaiveDate>,
  pub property_details: Option<PropertyDetails>,
  pub hosting_preferences: Option<HostingPreferences>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Profile {
  pub fn new(user_id: Uuid, bio: &str) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      user_id,
      bio: bio.to_string(),
      phone: None,
      address: None,
      languages: Vec::new(),
      skills: Vec::new(),
      available_from: None,
      available_until: None,
      property_details: None,
      hosting_preferences: None,
      created_at: now,
      updated_at: now,
    }
  }
}

impl Entity for Profile {
  const COLLECTION: &'static str = "profiles";

  fn id(&self) -> Uuid {
    self.id
  }

  fn touch(&mut self, at: DateTime<Utc>) {
    self.updated_at = at;
  }
}
