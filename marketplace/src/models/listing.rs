// marketplace/src/models/listing.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tabula::{Entity, Searchable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
  pub address: String,
  pub city: String,
  pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationType {
  PrivateRoom,
  SharedRoom,
  Apartment,
  Tent,
  Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
  Active,
  Inactive,
}

/// A property that needs help, owned by exactly one host. Only `Active`
/// listings are eligible for search and new booking requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
  pub id: Uuid,
  pub host_id: Uuid,
  pub title: String,
  pub description: String,
  pub location: Location,
  pub accommodation: AccommodationType,
  /// Category slugs describing the help required. Multi-valued.
  pub help_categories: Vec<String>,
  /// Languages spoken at the property.
  pub languages: Vec<String>,
  pub hours_per_week: u8,
  pub available_from: NaiveDate,
  pub available_until: NaiveDate,
  pub status: ListingStatus,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Listing {
  pub fn is_active(&self) -> bool {
    self.status == ListingStatus::Active
  }
}

impl Entity for Listing {
  const COLLECTION: &'static str = "listings";

  fn id(&self) -> Uuid {
    self.id
  }

  fn touch(&mut self, at: DateTime<Utc>) {
    self.updated_at = at;
  }
}

impl Searchable for Listing {
  fn text_field(&self, field: &str) -> Option<String> {
    match field {
      "title" => Some(self.title.clone()),
      "description" => Some(self.description.clone()),
      "city" => Some(self.location.city.clone()),
      "country" => Some(self.location.country.clone()),
      "address" => Some(self.location.address.clone()),
      _ => None,
    }
  }
}
