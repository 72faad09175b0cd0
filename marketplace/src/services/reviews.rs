// marketplace/src/services/reviews.rs

//! Reviews of completed stays. The two invariants live here, not in
//! storage: one review per (booking, reviewer) pair, and only `Completed`
//! bookings are reviewable.

use tracing::{debug, instrument};
use uuid::Uuid;

use tabula::Lookup;

use crate::errors::{AppError, Result};
use crate::models::{BookingStatus, Review, User};
use crate::state::Marketplace;

/// A review with the reviewer joined in.
#[derive(Debug, Clone)]
pub struct ReviewDetail {
  pub review: Review,
  pub reviewer: Option<User>,
}

/// Creates a review of the other party of a completed booking. The reviewer
/// must be the booking's helper or the host of the booked listing; the
/// reviewee is whoever sits on the other side.
#[instrument(name = "reviews::create", skip(marketplace, comment), fields(%reviewer_id, %booking_id), err(Display))]
pub fn create_review(
  marketplace: &Marketplace,
  reviewer_id: Uuid,
  booking_id: Uuid,
  rating: u8,
  comment: Option<String>,
) -> Result<Review> {
  if !(1..=5).contains(&rating) {
    return Err(AppError::Validation("Rating must be between 1 and 5".to_string()));
  }

  let booking = marketplace
    .bookings
    .find(booking_id)?
    .ok_or_else(|| AppError::NotFound(format!("Booking {}", booking_id)))?;
  if booking.status != BookingStatus::Completed {
    return Err(AppError::Validation(
      "Only completed stays can be reviewed".to_string(),
    ));
  }

  let listing = marketplace
    .listings
    .find(booking.listing_id)?
    .ok_or_else(|| AppError::NotFound(format!("Listing {}", booking.listing_id)))?;

  let reviewee_id = if reviewer_id == booking.helper_id {
    listing.host_id
  } else if reviewer_id == listing.host_id {
    booking.helper_id
  } else {
    return Err(AppError::Forbidden(
      "Only the helper or the host of a stay can review it".to_string(),
    ));
  };

  let already_reviewed = !marketplace
    .reviews
    .filtered(&|review: &Review| {
      review.booking_id == booking_id && review.reviewer_id == reviewer_id
    })?
    .is_empty();
  if already_reviewed {
    return Err(AppError::Duplicate("Booking already reviewed by this user".to_string()));
  }

  let review = Review::new(booking_id, reviewer_id, reviewee_id, rating, comment);
  marketplace.reviews.insert(review.clone())?;
  debug!(review_id = %review.id, "review created");
  Ok(review)
}

/// Reviews received by a user, newest first, reviewers joined in.
pub fn reviews_for(marketplace: &Marketplace, reviewee_id: Uuid) -> Result<Vec<ReviewDetail>> {
  let mut reviews = marketplace
    .reviews
    .filtered(&|review: &Review| review.reviewee_id == reviewee_id)?;
  reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));

  let users: Lookup<User> = Lookup::from_records(marketplace.users.all()?);
  Ok(
    reviews
      .into_iter()
      .map(|review| {
        let reviewer = users.resolve(review.reviewer_id);
        ReviewDetail { review, reviewer }
      })
      .collect(),
  )
}

/// Mean received rating, `None` when the user has no reviews yet.
pub fn average_rating(marketplace: &Marketplace, reviewee_id: Uuid) -> Result<Option<f64>> {
  let reviews = marketplace
    .reviews
    .filtered(&|review: &Review| review.reviewee_id == reviewee_id)?;
  if reviews.is_empty() {
    return Ok(None);
  }
  let sum: u32 = reviews.iter().map(|review| u32::from(review.rating)).sum();
  Ok(Some(f64::from(sum) / reviews.len() as f64))
}

/// The helper's own view: has this booking already been reviewed by them?
pub fn has_reviewed(marketplace: &Marketplace, reviewer_id: Uuid, booking_id: Uuid) -> Result<bool> {
  Ok(
    !marketplace
      .reviews
      .filtered(&|review: &Review| {
        review.booking_id == booking_id && review.reviewer_id == reviewer_id
      })?
      .is_empty(),
  )
}
