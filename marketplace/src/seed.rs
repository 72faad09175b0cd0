// marketplace/src/seed.rs

//! Idempotent seeding: the category taxonomy on every open, demo records on
//! request.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::errors::Result;
use crate::models::{
  AccommodationType, Category, Listing, ListingStatus, Location, Role, User,
};
use crate::services::auth;
use crate::state::Marketplace;

/// The static help-category taxonomy: (slug, name, description).
pub const CATEGORY_TAXONOMY: &[(&str, &str, &str)] = &[
  ("gardening", "Gardening", "Planting, weeding, and general garden upkeep"),
  ("cooking", "Cooking", "Preparing meals for the household or guests"),
  ("childcare", "Childcare", "Looking after children and helping with school runs"),
  ("animal-care", "Animal care", "Feeding and caring for pets or farm animals"),
  ("language-practice", "Language practice", "Conversation practice and tutoring"),
  ("construction", "Construction", "Renovation, painting, and light building work"),
  ("housekeeping", "Housekeeping", "Cleaning and keeping shared spaces in order"),
  ("farming", "Farming", "Seasonal harvest and general farm work"),
];

/// Inserts any taxonomy entries that are not present yet. Safe to run on
/// every open.
pub fn seed_categories(marketplace: &Marketplace) -> Result<()> {
  let existing = marketplace.categories.all()?;
  let mut inserted = 0usize;
  for (slug, name, description) in CATEGORY_TAXONOMY {
    if existing.iter().any(|category| category.slug == *slug) {
      continue;
    }
    marketplace.categories.insert(Category::new(slug, name, description))?;
    inserted += 1;
  }
  if inserted > 0 {
    debug!(inserted, "category taxonomy seeded");
  }
  Ok(())
}

/// Seeds a demo host, helper, and one active listing. Keyed on the demo
/// host's email, so reopening an already-seeded store is a no-op.
pub fn seed_demo_records(marketplace: &Marketplace) -> Result<()> {
  let demo_host_email = "host@demo.workstay.local";
  if !marketplace
    .users
    .filtered(&|user: &User| user.email == demo_host_email)?
    .is_empty()
  {
    return Ok(());
  }

  let host = User::new(
    demo_host_email,
    auth::hash_password("demo-password")?,
    vec![Role::Host],
  );
  let helper = User::new(
    "helper@demo.workstay.local",
    auth::hash_password("demo-password")?,
    vec![Role::Helper],
  );
  let host_id = host.id;
  marketplace.users.insert(host)?;
  marketplace.users.insert(helper)?;

  let now = chrono::Utc::now();
  marketplace.listings.insert(Listing {
    id: uuid::Uuid::new_v4(),
    host_id,
    title: "Garden help on a Brandenburg smallholding".to_string(),
    description: "Help us keep the vegetable garden going through the season.".to_string(),
    location: Location {
      address: "Dorfstrasse 12".to_string(),
      city: "Potsdam".to_string(),
      country: "Germany".to_string(),
    },
    accommodation: AccommodationType::PrivateRoom,
    help_categories: vec!["gardening".to_string(), "animal-care".to_string()],
    languages: vec!["English".to_string(), "German".to_string()],
    hours_per_week: 20,
    available_from: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap_or_default(),
    available_until: NaiveDate::from_ymd_opt(2026, 10, 31).unwrap_or_default(),
    status: ListingStatus::Active,
    created_at: now,
    updated_at: now,
  })?;

  info!("demo records seeded");
  Ok(())
}
