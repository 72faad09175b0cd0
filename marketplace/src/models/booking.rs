// marketplace/src/models/booking.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tabula::Entity;

/// Booking lifecycle. Transitions are driven by the booking service:
///
/// ```text
/// Pending ──confirm──> Confirmed ──check-out──> Completed
///    │                     │
///    └──cancel──┐          ├──cancel──> Cancelled
///               v          └──report──> IssueReported
///           Cancelled
/// ```
///
/// `Cancelled`, `Completed`, and `IssueReported` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
  Pending,
  Confirmed,
  Cancelled,
  Completed,
  IssueReported,
}

impl BookingStatus {
  pub fn can_transition_to(self, next: BookingStatus) -> bool {
    use BookingStatus::*;
    matches!(
      (self, next),
      (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Cancelled) | (Confirmed, Completed) | (Confirmed, IssueReported)
    )
  }

  pub fn is_terminal(self) -> bool {
    use BookingStatus::*;
    matches!(self, Cancelled | Completed | IssueReported)
  }
}

/// A helper's request to stay at a listing for a date window. Created by the
/// helper; transitioned by the listing's host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
  pub id: Uuid,
  pub listing_id: Uuid,
  pub helper_id: Uuid,
  /// The helper's note to the host sent with the request.
  pub message: String,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  pub status: BookingStatus,
  pub checked_in_at: Option<DateTime<Utc>>,
  pub checked_out_at: Option<DateTime<Utc>>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Booking {
  pub fn new(
    listing_id: Uuid,
    helper_id: Uuid,
    message: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      listing_id,
      helper_id,
      message: message.to_string(),
      start_date,
      end_date,
      status: BookingStatus::Pending,
      checked_in_at: None,
      checked_out_at: None,
      created_at: now,
      updated_at: now,
    }
  }
}

impl Entity for Booking {
  const COLLECTION: &'static str = "bookings";

  fn id(&self) -> Uuid {
    self.id
  }

  fn touch(&mut self, at: DateTime<Utc>) {
    self.updated_at = at;
  }
}
