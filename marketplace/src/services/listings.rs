// marketplace/src/services/listings.rs

use chrono::{NaiveDate, Utc};
use tracing::{debug, instrument};
use uuid::Uuid;

use tabula::{Lookup, Page};

use crate::errors::{AppError, Result};
use crate::models::{
  AccommodationType, Category, Listing, ListingStatus, Location, Role, User,
};
use crate::search::{search_listings, ListingSearch};
use crate::state::Marketplace;

/// Everything needed to create a listing; id, status, and timestamps are
/// assigned by the service.
#[derive(Debug, Clone)]
pub struct NewListing {
  pub title: String,
  pub description: String,
  pub location: Location,
  pub accommodation: AccommodationType,
  pub help_categories: Vec<String>,
  pub languages: Vec<String>,
  pub hours_per_week: u8,
  pub available_from: NaiveDate,
  pub available_until: NaiveDate,
}

/// A listing with its host joined in; `host` is `None` on a dangling
/// `host_id`.
#[derive(Debug, Clone)]
pub struct ListingDetail {
  pub listing: Listing,
  pub host: Option<User>,
}

fn validate_new_listing(marketplace: &Marketplace, input: &NewListing) -> Result<()> {
  if input.title.trim().is_empty() {
    return Err(AppError::Validation("Listing title is required".to_string()));
  }
  if input.hours_per_week == 0 {
    return Err(AppError::Validation("Weekly hours must be at least 1".to_string()));
  }
  if input.available_from > input.available_until {
    return Err(AppError::Validation(
      "Availability window ends before it starts".to_string(),
    ));
  }
  if input.help_categories.is_empty() {
    return Err(AppError::Validation("At least one help category is required".to_string()));
  }
  // Category slugs must exist in the seeded taxonomy.
  let taxonomy = marketplace.categories.all()?;
  for slug in &input.help_categories {
    if !taxonomy.iter().any(|category: &Category| &category.slug == slug) {
      return Err(AppError::Validation(format!("Unknown help category '{}'", slug)));
    }
  }
  Ok(())
}

/// Creates an active listing owned by `host_id`. The user must hold the
/// host role.
#[instrument(name = "listings::create", skip(marketplace, input), fields(%host_id), err(Display))]
pub fn create_listing(marketplace: &Marketplace, host_id: Uuid, input: NewListing) -> Result<Listing> {
  let host = marketplace
    .users
    .find(host_id)?
    .ok_or_else(|| AppError::NotFound(format!("User {}", host_id)))?;
  if !host.has_role(Role::Host) {
    return Err(AppError::Forbidden("Only hosts can create listings".to_string()));
  }
  validate_new_listing(marketplace, &input)?;

  let now = Utc::now();
  let listing = Listing {
    id: Uuid::new_v4(),
    host_id,
    title: input.title,
    description: input.description,
    location: input.location,
    accommodation: input.accommodation,
    help_categories: input.help_categories,
    languages: input.languages,
    hours_per_week: input.hours_per_week,
    available_from: input.available_from,
    available_until: input.available_until,
    status: ListingStatus::Active,
    created_at: now,
    updated_at: now,
  };
  marketplace.listings.insert(listing.clone())?;
  debug!(listing_id = %listing.id, "listing created");
  Ok(listing)
}

fn owned_listing(marketplace: &Marketplace, host_id: Uuid, listing_id: Uuid) -> Result<Listing> {
  let listing = marketplace
    .listings
    .find(listing_id)?
    .ok_or_else(|| AppError::NotFound(format!("Listing {}", listing_id)))?;
  if listing.host_id != host_id {
    return Err(AppError::Forbidden(
      "Only the owning host can modify a listing".to_string(),
    ));
  }
  Ok(listing)
}

/// Applies a mutation to a listing owned by `host_id`.
#[instrument(name = "listings::update", skip_all, fields(%host_id, %listing_id), err(Display))]
pub fn update_listing<F>(
  marketplace: &Marketplace,
  host_id: Uuid,
  listing_id: Uuid,
  mutate: F,
) -> Result<Listing>
where
  F: FnOnce(&mut Listing),
{
  owned_listing(marketplace, host_id, listing_id)?;
  Ok(marketplace.listings.update(listing_id, mutate)?)
}

/// Flips a listing between `Active` and `Inactive`.
pub fn set_listing_status(
  marketplace: &Marketplace,
  host_id: Uuid,
  listing_id: Uuid,
  status: ListingStatus,
) -> Result<Listing> {
  update_listing(marketplace, host_id, listing_id, |listing| listing.status = status)
}

/// Deletes a listing owned by `host_id`. Deleting an already-deleted
/// listing reports `NotFound` (the ownership check has nothing to read).
#[instrument(name = "listings::delete", skip(marketplace), fields(%host_id, %listing_id), err(Display))]
pub fn delete_listing(marketplace: &Marketplace, host_id: Uuid, listing_id: Uuid) -> Result<bool> {
  owned_listing(marketplace, host_id, listing_id)?;
  Ok(marketplace.listings.delete(listing_id)?)
}

/// One listing with its host attached.
pub fn get_listing(marketplace: &Marketplace, listing_id: Uuid) -> Result<ListingDetail> {
  let listing = marketplace
    .listings
    .find(listing_id)?
    .ok_or_else(|| AppError::NotFound(format!("Listing {}", listing_id)))?;
  let host = marketplace.users.find(listing.host_id)?;
  Ok(ListingDetail { listing, host })
}

/// All of a host's listings, regardless of status.
pub fn listings_for_host(marketplace: &Marketplace, host_id: Uuid) -> Result<Vec<Listing>> {
  Ok(
    marketplace
      .listings
      .filtered(&|listing: &Listing| listing.host_id == host_id)?,
  )
}

/// Browse search: filter, newest-first sort, fixed-size page, hosts joined
/// via one per-snapshot lookup instead of a scan per listing.
#[instrument(name = "listings::search", skip(marketplace, query), err(Display))]
pub fn search(marketplace: &Marketplace, query: &ListingSearch) -> Result<Page<ListingDetail>> {
  let page = search_listings(marketplace.listings.all()?, query)?;
  let hosts: Lookup<User> = Lookup::from_records(marketplace.users.all()?);
  Ok(page.map(|listing| {
    let host = hosts.resolve(listing.host_id);
    ListingDetail { listing, host }
  }))
}
