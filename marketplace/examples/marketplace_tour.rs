// examples/marketplace_tour.rs
//! A tour of the data layer through the async API facade: register a host
//! and a helper, publish a listing, search it, run a booking from request
//! to check-out, and leave a review.
//!
//! Run with: cargo run -p workstay --example marketplace_tour

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use workstay::models::{AccommodationType, Location, Role};
use workstay::services::auth::RegisterInput;
use workstay::services::listings::NewListing;
use workstay::{AppConfig, ListingSearch, Marketplace, MarketplaceApi};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,workstay=debug".into()),
    )
    .init();

  let mut config = AppConfig::in_memory();
  config.api_latency_ms = 150;
  let api = MarketplaceApi::new(Marketplace::open(config)?);

  let host = api
    .register(RegisterInput {
      email: "marta@example.com".to_string(),
      password: "a-long-passphrase".to_string(),
      roles: vec![Role::Host],
    })
    .await
    .into_result()?;
  let helper = api
    .register(RegisterInput {
      email: "jonas@example.com".to_string(),
      password: "another-passphrase".to_string(),
      roles: vec![Role::Helper],
    })
    .await
    .into_result()?;
  info!(host = %host.email, helper = %helper.email, "accounts created");

  let listing = api
    .create_listing(
      host.id,
      NewListing {
        title: "Vineyard help near Porto".to_string(),
        description: "Pruning and harvest support, sunny guest room included.".to_string(),
        location: Location {
          address: "Quinta da Ribeira 4".to_string(),
          city: "Porto".to_string(),
          country: "Portugal".to_string(),
        },
        accommodation: AccommodationType::PrivateRoom,
        help_categories: vec!["farming".to_string(), "gardening".to_string()],
        languages: vec!["English".to_string(), "Portuguese".to_string()],
        hours_per_week: 25,
        available_from: date(2026, 9, 1),
        available_until: date(2026, 11, 30),
      },
    )
    .await
    .into_result()?;
  info!(listing_id = %listing.id, title = %listing.title, "listing published");

  let hits = api
    .search_listings(&ListingSearch {
      location: Some("porto".to_string()),
      category: Some("farming".to_string()),
      start_date: Some(date(2026, 9, 15)),
      end_date: Some(date(2026, 10, 15)),
      ..Default::default()
    })
    .await
    .into_result()?;
  info!(total = hits.total, "search results");

  let booking = api
    .request_booking(
      helper.id,
      listing.id,
      "I have two harvest seasons behind me and would love to join.",
      date(2026, 9, 15),
      date(2026, 10, 15),
    )
    .await
    .into_result()?;

  let conversation = api
    .open_conversation(helper.id, host.id, listing.id)
    .await
    .into_result()?;
  api
    .send_message(conversation.id, host.id, "Your request looks great, confirming now.")
    .await
    .into_result()?;

  api.confirm_booking(host.id, booking.id).await.into_result()?;
  api.check_in(host.id, booking.id).await.into_result()?;
  let finished = api.check_out(host.id, booking.id).await.into_result()?;
  info!(status = ?finished.status, "stay completed");

  api
    .create_review(helper.id, booking.id, 5, Some("Wonderful hosts and views.".to_string()))
    .await
    .into_result()?;
  let rating = api.average_rating(host.id).await.into_result()?;
  info!(?rating, "host rating after the stay");

  Ok(())
}
