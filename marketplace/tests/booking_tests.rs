// tests/booking_tests.rs
mod common;

use common::*;
use workstay::models::{BookingStatus, ListingStatus};
use workstay::services::{bookings, listings};
use workstay::AppError;

#[test]
fn full_lifecycle_request_confirm_check_in_check_out() {
  let marketplace = marketplace();
  let (host, _helper, _listing, booking) = pending_booking(&marketplace);
  assert_eq!(booking.status, BookingStatus::Pending);

  let confirmed = bookings::confirm_booking(&marketplace, host.id, booking.id).unwrap();
  assert_eq!(confirmed.status, BookingStatus::Confirmed);
  assert!(confirmed.checked_in_at.is_none());

  let arrived = bookings::check_in(&marketplace, host.id, booking.id).unwrap();
  assert_eq!(arrived.status, BookingStatus::Confirmed);
  assert!(arrived.checked_in_at.is_some());

  let done = bookings::check_out(&marketplace, host.id, booking.id).unwrap();
  assert_eq!(done.status, BookingStatus::Completed);
  assert!(done.checked_out_at.is_some());
}

#[test]
fn pending_bookings_can_be_cancelled_but_not_completed() {
  let marketplace = marketplace();
  let (host, _, _, booking) = pending_booking(&marketplace);

  // check-in needs a confirmation first
  let early = bookings::check_in(&marketplace, host.id, booking.id);
  assert!(matches!(early, Err(AppError::Validation(_))));

  let cancelled = bookings::cancel_booking(&marketplace, host.id, booking.id).unwrap();
  assert_eq!(cancelled.status, BookingStatus::Cancelled);

  // terminal: nothing moves it again
  let revive = bookings::confirm_booking(&marketplace, host.id, booking.id);
  assert!(matches!(revive, Err(AppError::Validation(_))));
}

#[test]
fn confirmed_bookings_can_report_an_issue() {
  let marketplace = marketplace();
  let (host, _, _, booking) = pending_booking(&marketplace);
  bookings::confirm_booking(&marketplace, host.id, booking.id).unwrap();

  let flagged = bookings::report_issue(&marketplace, host.id, booking.id).unwrap();
  assert_eq!(flagged.status, BookingStatus::IssueReported);

  let after = bookings::check_in(&marketplace, host.id, booking.id);
  assert!(matches!(after, Err(AppError::Validation(_))));
}

#[test]
fn double_check_in_is_rejected() {
  let marketplace = marketplace();
  let (host, _, _, booking) = pending_booking(&marketplace);
  bookings::confirm_booking(&marketplace, host.id, booking.id).unwrap();
  bookings::check_in(&marketplace, host.id, booking.id).unwrap();

  let again = bookings::check_in(&marketplace, host.id, booking.id);
  assert!(matches!(again, Err(AppError::Validation(_))));
}

#[test]
fn check_out_requires_a_prior_check_in() {
  let marketplace = marketplace();
  let (host, _, _, booking) = pending_booking(&marketplace);
  bookings::confirm_booking(&marketplace, host.id, booking.id).unwrap();

  let skipped = bookings::check_out(&marketplace, host.id, booking.id);
  assert!(matches!(skipped, Err(AppError::Validation(_))));
}

#[test]
fn only_the_listing_host_drives_transitions() {
  let marketplace = marketplace();
  let (_host, helper, _, booking) = pending_booking(&marketplace);
  let other_host = register_host(&marketplace, "other@example.com");

  for actor in [helper.id, other_host.id] {
    let result = bookings::confirm_booking(&marketplace, actor, booking.id);
    assert!(matches!(result, Err(AppError::Forbidden(_))));
  }
}

#[test]
fn requests_need_the_helper_role_and_an_active_listing() {
  let marketplace = marketplace();
  let host = register_host(&marketplace, "host@example.com");
  let listing = create_listing(&marketplace, host.id, "Berlin");

  // hosts don't request stays
  let as_host = bookings::request_booking(
    &marketplace,
    host.id,
    listing.id,
    "hi",
    date(2026, 5, 1),
    date(2026, 5, 8),
  );
  assert!(matches!(as_host, Err(AppError::Forbidden(_))));

  let helper = register_helper(&marketplace, "helper@example.com");
  listings::set_listing_status(&marketplace, host.id, listing.id, ListingStatus::Inactive).unwrap();
  let inactive = bookings::request_booking(
    &marketplace,
    helper.id,
    listing.id,
    "hi",
    date(2026, 5, 1),
    date(2026, 5, 8),
  );
  assert!(matches!(inactive, Err(AppError::Validation(_))));
}

#[test]
fn inverted_stay_windows_are_rejected() {
  let marketplace = marketplace();
  let host = register_host(&marketplace, "host@example.com");
  let helper = register_helper(&marketplace, "helper@example.com");
  let listing = create_listing(&marketplace, host.id, "Berlin");

  let result = bookings::request_booking(
    &marketplace,
    helper.id,
    listing.id,
    "hi",
    date(2026, 5, 21),
    date(2026, 5, 1),
  );
  assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn booking_lists_join_listing_and_helper() {
  let marketplace = marketplace();
  let (host, helper, listing, booking) = pending_booking(&marketplace);

  let for_helper = bookings::bookings_for_helper(&marketplace, helper.id).unwrap();
  assert_eq!(for_helper.len(), 1);
  assert_eq!(for_helper[0].booking.id, booking.id);
  assert_eq!(for_helper[0].listing.as_ref().map(|l| l.id), Some(listing.id));
  assert_eq!(for_helper[0].helper.as_ref().map(|u| u.id), Some(helper.id));

  let for_host = bookings::bookings_for_host(&marketplace, host.id).unwrap();
  assert_eq!(for_host.len(), 1);
  assert_eq!(for_host[0].booking.id, booking.id);

  // a host with no listings sees nothing
  let other = register_host(&marketplace, "other@example.com");
  assert!(bookings::bookings_for_host(&marketplace, other.id).unwrap().is_empty());
}

#[test]
fn host_booking_lists_are_newest_first() {
  let marketplace = marketplace();
  let (host, helper, listing, first) = pending_booking(&marketplace);
  let second = bookings::request_booking(
    &marketplace,
    helper.id,
    listing.id,
    "another stretch",
    date(2026, 6, 1),
    date(2026, 6, 14),
  )
  .unwrap();

  let for_host = bookings::bookings_for_host(&marketplace, host.id).unwrap();
  assert_eq!(for_host.len(), 2);
  assert_eq!(for_host[0].booking.id, second.id);
  assert_eq!(for_host[1].booking.id, first.id);
}
