// marketplace/src/services/bookings.rs

//! Booking lifecycle. Helpers create requests; every transition after that
//! is driven by the host of the booked listing.

use chrono::{NaiveDate, Utc};
use tracing::{debug, instrument};
use uuid::Uuid;

use tabula::Lookup;

use crate::errors::{AppError, Result};
use crate::models::{Booking, BookingStatus, Listing, Role, User};
use crate::state::Marketplace;

/// A booking with its listing and helper joined in; either side may be
/// `None` when the reference dangles.
#[derive(Debug, Clone)]
pub struct BookingDetail {
  pub booking: Booking,
  pub listing: Option<Listing>,
  pub helper: Option<User>,
}

/// A helper requests a stay at an active listing.
#[instrument(name = "bookings::request", skip(marketplace, message), fields(%helper_id, %listing_id), err(Display))]
pub fn request_booking(
  marketplace: &Marketplace,
  helper_id: Uuid,
  listing_id: Uuid,
  message: &str,
  start_date: NaiveDate,
  end_date: NaiveDate,
) -> Result<Booking> {
  let helper = marketplace
    .users
    .find(helper_id)?
    .ok_or_else(|| AppError::NotFound(format!("User {}", helper_id)))?;
  if !helper.has_role(Role::Helper) {
    return Err(AppError::Forbidden("Only helpers can request bookings".to_string()));
  }

  let listing = marketplace
    .listings
    .find(listing_id)?
    .ok_or_else(|| AppError::NotFound(format!("Listing {}", listing_id)))?;
  if !listing.is_active() {
    return Err(AppError::Validation("Listing is not accepting requests".to_string()));
  }
  if listing.host_id == helper_id {
    return Err(AppError::Validation("Hosts cannot book their own listing".to_string()));
  }
  if start_date > end_date {
    return Err(AppError::Validation("Stay window ends before it starts".to_string()));
  }

  let booking = Booking::new(listing_id, helper_id, message, start_date, end_date);
  marketplace.bookings.insert(booking.clone())?;
  debug!(booking_id = %booking.id, "booking requested");
  Ok(booking)
}

/// Loads the booking and checks that `host_id` owns the booked listing.
fn authorized_booking(marketplace: &Marketplace, host_id: Uuid, booking_id: Uuid) -> Result<Booking> {
  let booking = marketplace
    .bookings
    .find(booking_id)?
    .ok_or_else(|| AppError::NotFound(format!("Booking {}", booking_id)))?;
  let listing = marketplace
    .listings
    .find(booking.listing_id)?
    .ok_or_else(|| AppError::NotFound(format!("Listing {}", booking.listing_id)))?;
  if listing.host_id != host_id {
    return Err(AppError::Forbidden(
      "Only the host of the booked listing can do that".to_string(),
    ));
  }
  Ok(booking)
}

fn transition(
  marketplace: &Marketplace,
  host_id: Uuid,
  booking_id: Uuid,
  next: BookingStatus,
) -> Result<Booking> {
  let booking = authorized_booking(marketplace, host_id, booking_id)?;
  if !booking.status.can_transition_to(next) {
    return Err(AppError::Validation(format!(
      "Booking cannot go from {:?} to {:?}",
      booking.status, next
    )));
  }
  Ok(marketplace.bookings.update(booking_id, |booking| booking.status = next)?)
}

#[instrument(name = "bookings::confirm", skip(marketplace), fields(%host_id, %booking_id), err(Display))]
pub fn confirm_booking(marketplace: &Marketplace, host_id: Uuid, booking_id: Uuid) -> Result<Booking> {
  transition(marketplace, host_id, booking_id, BookingStatus::Confirmed)
}

#[instrument(name = "bookings::cancel", skip(marketplace), fields(%host_id, %booking_id), err(Display))]
pub fn cancel_booking(marketplace: &Marketplace, host_id: Uuid, booking_id: Uuid) -> Result<Booking> {
  transition(marketplace, host_id, booking_id, BookingStatus::Cancelled)
}

#[instrument(name = "bookings::report_issue", skip(marketplace), fields(%host_id, %booking_id), err(Display))]
pub fn report_issue(marketplace: &Marketplace, host_id: Uuid, booking_id: Uuid) -> Result<Booking> {
  transition(marketplace, host_id, booking_id, BookingStatus::IssueReported)
}

/// Stamps the helper's arrival on a confirmed booking. Idempotence is
/// rejected: a second check-in is a validation error.
#[instrument(name = "bookings::check_in", skip(marketplace), fields(%host_id, %booking_id), err(Display))]
pub fn check_in(marketplace: &Marketplace, host_id: Uuid, booking_id: Uuid) -> Result<Booking> {
  let booking = authorized_booking(marketplace, host_id, booking_id)?;
  if booking.status != BookingStatus::Confirmed {
    return Err(AppError::Validation(
      "Only confirmed bookings can be checked in".to_string(),
    ));
  }
  if booking.checked_in_at.is_some() {
    return Err(AppError::Validation("Booking is already checked in".to_string()));
  }
  Ok(
    marketplace
      .bookings
      .update(booking_id, |booking| booking.checked_in_at = Some(Utc::now()))?,
  )
}

/// Ends a checked-in stay: stamps the departure and completes the booking.
#[instrument(name = "bookings::check_out", skip(marketplace), fields(%host_id, %booking_id), err(Display))]
pub fn check_out(marketplace: &Marketplace, host_id: Uuid, booking_id: Uuid) -> Result<Booking> {
  let booking = authorized_booking(marketplace, host_id, booking_id)?;
  if booking.status != BookingStatus::Confirmed || booking.checked_in_at.is_none() {
    return Err(AppError::Validation(
      "Only checked-in bookings can be checked out".to_string(),
    ));
  }
  Ok(marketplace.bookings.update(booking_id, |booking| {
    booking.checked_out_at = Some(Utc::now());
    booking.status = BookingStatus::Completed;
  })?)
}

/// One booking with its listing and helper joined in.
pub fn get_booking(marketplace: &Marketplace, booking_id: Uuid) -> Result<BookingDetail> {
  let booking = marketplace
    .bookings
    .find(booking_id)?
    .ok_or_else(|| AppError::NotFound(format!("Booking {}", booking_id)))?;
  let listing = marketplace.listings.find(booking.listing_id)?;
  let helper = marketplace.users.find(booking.helper_id)?;
  Ok(BookingDetail { booking, listing, helper })
}

fn attach_details(marketplace: &Marketplace, bookings: Vec<Booking>) -> Result<Vec<BookingDetail>> {
  let listings: Lookup<Listing> = Lookup::from_records(marketplace.listings.all()?);
  let users: Lookup<User> = Lookup::from_records(marketplace.users.all()?);
  Ok(
    bookings
      .into_iter()
      .map(|booking| {
        let listing = listings.resolve(booking.listing_id);
        let helper = users.resolve(booking.helper_id);
        BookingDetail { booking, listing, helper }
      })
      .collect(),
  )
}

/// A helper's bookings, newest first, with joins.
pub fn bookings_for_helper(marketplace: &Marketplace, helper_id: Uuid) -> Result<Vec<BookingDetail>> {
  let mut bookings = marketplace
    .bookings
    .filtered(&|booking: &Booking| booking.helper_id == helper_id)?;
  bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
  attach_details(marketplace, bookings)
}

/// All bookings against any of a host's listings, newest first, with joins.
pub fn bookings_for_host(marketplace: &Marketplace, host_id: Uuid) -> Result<Vec<BookingDetail>> {
  let listings = marketplace
    .listings
    .filtered(&|listing: &Listing| listing.host_id == host_id)?;
  let listing_ids: Vec<Uuid> = listings.iter().map(|listing| listing.id).collect();
  let mut bookings = marketplace
    .bookings
    .filtered(&|booking: &Booking| listing_ids.contains(&booking.listing_id))?;
  bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
  attach_details(marketplace, bookings)
}
