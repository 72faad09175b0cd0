// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use chrono::NaiveDate;
use tracing::Level;
use uuid::Uuid;

use workstay::models::{
  AccommodationType, Booking, Listing, Location, Role, User,
};
use workstay::services::auth::{self, RegisterInput};
use workstay::services::bookings;
use workstay::services::listings::{self, NewListing};
use workstay::Marketplace;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

pub fn marketplace() -> Marketplace {
  setup_tracing();
  Marketplace::in_memory().expect("in-memory marketplace opens")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn register_host(marketplace: &Marketplace, email: &str) -> User {
  auth::register(
    marketplace,
    RegisterInput {
      email: email.to_string(),
      password: TEST_PASSWORD.to_string(),
      roles: vec![Role::Host],
    },
  )
  .expect("host registers")
}

pub fn register_helper(marketplace: &Marketplace, email: &str) -> User {
  auth::register(
    marketplace,
    RegisterInput {
      email: email.to_string(),
      password: TEST_PASSWORD.to_string(),
      roles: vec![Role::Helper],
    },
  )
  .expect("helper registers")
}

pub fn listing_input(city: &str, country: &str) -> NewListing {
  NewListing {
    title: format!("Help wanted in {city}"),
    description: "Hands-on help around the property.".to_string(),
    location: Location {
      address: "1 Main Street".to_string(),
      city: city.to_string(),
      country: country.to_string(),
    },
    accommodation: AccommodationType::PrivateRoom,
    help_categories: vec!["gardening".to_string()],
    languages: vec!["English".to_string(), "German".to_string()],
    hours_per_week: 20,
    available_from: date(2026, 4, 1),
    available_until: date(2026, 10, 31),
  }
}

pub fn create_listing(marketplace: &Marketplace, host_id: Uuid, city: &str) -> Listing {
  listings::create_listing(marketplace, host_id, listing_input(city, "Germany"))
    .expect("listing is created")
}

/// Host + helper + active listing + a pending booking request.
pub fn pending_booking(marketplace: &Marketplace) -> (User, User, Listing, Booking) {
  let host = register_host(marketplace, "host@example.com");
  let helper = register_helper(marketplace, "helper@example.com");
  let listing = create_listing(marketplace, host.id, "Berlin");
  let booking = bookings::request_booking(
    marketplace,
    helper.id,
    listing.id,
    "I'd love to help with the garden.",
    date(2026, 5, 1),
    date(2026, 5, 21),
  )
  .expect("booking request is created");
  (host, helper, listing, booking)
}

/// A booking driven through confirm → check-in → check-out (Completed).
pub fn completed_booking(marketplace: &Marketplace) -> (User, User, Listing, Booking) {
  let (host, helper, listing, booking) = pending_booking(marketplace);
  bookings::confirm_booking(marketplace, host.id, booking.id).expect("confirm");
  bookings::check_in(marketplace, host.id, booking.id).expect("check in");
  let booking = bookings::check_out(marketplace, host.id, booking.id).expect("check out");
  (host, helper, listing, booking)
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
