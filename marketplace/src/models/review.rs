// marketplace/src/models/review.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tabula::Entity;

/// A rating left after a completed stay. The review service enforces at most
/// one review per (`booking_id`, `reviewer_id`) pair and only for bookings in
/// `Completed` status; the storage layer knows nothing of either rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
  pub id: Uuid,
  pub booking_id: Uuid,
  pub reviewer_id: Uuid,
  pub reviewee_id: Uuid,
  /// 1..=5
  pub rating: u8,
  pub comment: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Review {
  pub fn new(
    booking_id: Uuid,
    reviewer_id: Uuid,
    reviewee_id: Uuid,
    rating: u8,
    comment: Option<String>,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      booking_id,
      reviewer_id,
      reviewee_id,
      rating,
      comment,
      created_at: now,
      updated_at: now,
    }
  }
}

impl Entity for Review {
  const COLLECTION: &'static str = "reviews";

  fn id(&self) -> Uuid {
    self.id
  }

  fn touch(&mut self, at: DateTime<Utc>) {
    self.updated_at = at;
  }
}
