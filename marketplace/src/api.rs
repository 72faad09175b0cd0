// marketplace/src/api.rs

//! The mock API surface: every operation of the data layer behind a uniform
//! `{data, success, error, timestamp}` envelope, with a fixed artificial
//! delay emulating network latency. Attempt-once semantics throughout: no
//! retry, no timeout, no cancellation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::time::Duration;
use tracing::error;
use uuid::Uuid;

use tabula::Page;

use crate::errors::{AppError, Result};
use crate::models::{
  Booking, Category, Conversation, Listing, ListingStatus, Message, Profile, Review, User,
};
use crate::search::ListingSearch;
use crate::services::auth::{AuthSession, RegisterInput};
use crate::services::bookings::BookingDetail;
use crate::services::listings::{ListingDetail, NewListing};
use crate::services::profiles::ProfileView;
use crate::services::reviews::ReviewDetail;
use crate::services::{auth, bookings, categories, listings, messaging, profiles, reviews};
use crate::state::Marketplace;

/// The uniform response envelope. `error` carries the application error's
/// display string; callers that need typed errors use the service layer
/// directly.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
  pub data: Option<T>,
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
  pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
  pub fn from_result(result: Result<T>) -> Self {
    match result {
      Ok(data) => Self {
        data: Some(data),
        success: true,
        error: None,
        timestamp: Utc::now(),
      },
      Err(err) => {
        error!(application_error = %err, "API call failed");
        Self {
          data: None,
          success: false,
          error: Some(err.to_string()),
          timestamp: Utc::now(),
        }
      }
    }
  }

  /// Unwraps the envelope back into a `Result`. The original error type is
  /// gone; the message comes back as `AppError::Internal`.
  pub fn into_result(self) -> Result<T> {
    match self.data {
      Some(data) if self.success => Ok(data),
      _ => Err(AppError::Internal(
        self.error.unwrap_or_else(|| "API call failed without an error message".to_string()),
      )),
    }
  }
}

/// The async facade over the marketplace services.
#[derive(Clone)]
pub struct MarketplaceApi {
  marketplace: Marketplace,
  latency: Duration,
}

impl MarketplaceApi {
  pub fn new(marketplace: Marketplace) -> Self {
    let latency = Duration::from_millis(marketplace.config.api_latency_ms);
    Self { marketplace, latency }
  }

  /// Direct access to the underlying data layer (tests, seeding).
  pub fn marketplace(&self) -> &Marketplace {
    &self.marketplace
  }

  /// One fixed timer per call. Not cancellable, no timeout semantics.
  async fn simulate_latency(&self) {
    if !self.latency.is_zero() {
      tokio::time::sleep(self.latency).await;
    }
  }

  // --- auth ---

  pub async fn register(&self, input: RegisterInput) -> ApiResponse<User> {
    self.simulate_latency().await;
    ApiResponse::from_result(auth::register(&self.marketplace, input))
  }

  pub async fn login(&self, email: &str, password: &str) -> ApiResponse<AuthSession> {
    self.simulate_latency().await;
    ApiResponse::from_result(auth::login(&self.marketplace, email, password))
  }

  // --- profiles ---

  pub async fn create_profile(&self, user_id: Uuid, bio: &str) -> ApiResponse<Profile> {
    self.simulate_latency().await;
    ApiResponse::from_result(profiles::create_profile(&self.marketplace, user_id, bio))
  }

  pub async fn update_profile<F>(
    &self,
    acting_user_id: Uuid,
    profile_id: Uuid,
    mutate: F,
  ) -> ApiResponse<Profile>
  where
    F: FnOnce(&mut Profile),
  {
    self.simulate_latency().await;
    ApiResponse::from_result(profiles::update_profile(
      &self.marketplace,
      acting_user_id,
      profile_id,
      mutate,
    ))
  }

  pub async fn get_profile(&self, profile_id: Uuid) -> ApiResponse<ProfileView> {
    self.simulate_latency().await;
    ApiResponse::from_result(profiles::get_profile(&self.marketplace, profile_id))
  }

  // --- listings ---

  pub async fn create_listing(&self, host_id: Uuid, input: NewListing) -> ApiResponse<Listing> {
    self.simulate_latency().await;
    ApiResponse::from_result(listings::create_listing(&self.marketplace, host_id, input))
  }

  pub async fn update_listing<F>(
    &self,
    host_id: Uuid,
    listing_id: Uuid,
    mutate: F,
  ) -> ApiResponse<Listing>
  where
    F: FnOnce(&mut Listing),
  {
    self.simulate_latency().await;
    ApiResponse::from_result(listings::update_listing(
      &self.marketplace,
      host_id,
      listing_id,
      mutate,
    ))
  }

  pub async fn set_listing_status(
    &self,
    host_id: Uuid,
    listing_id: Uuid,
    status: ListingStatus,
  ) -> ApiResponse<Listing> {
    self.simulate_latency().await;
    ApiResponse::from_result(listings::set_listing_status(
      &self.marketplace,
      host_id,
      listing_id,
      status,
    ))
  }

  pub async fn delete_listing(&self, host_id: Uuid, listing_id: Uuid) -> ApiResponse<bool> {
    self.simulate_latency().await;
    ApiResponse::from_result(listings::delete_listing(&self.marketplace, host_id, listing_id))
  }

  pub async fn get_listing(&self, listing_id: Uuid) -> ApiResponse<ListingDetail> {
    self.simulate_latency().await;
    ApiResponse::from_result(listings::get_listing(&self.marketplace, listing_id))
  }

  pub async fn listings_for_host(&self, host_id: Uuid) -> ApiResponse<Vec<Listing>> {
    self.simulate_latency().await;
    ApiResponse::from_result(listings::listings_for_host(&self.marketplace, host_id))
  }

  pub async fn search_listings(&self, query: &ListingSearch) -> ApiResponse<Page<ListingDetail>> {
    self.simulate_latency().await;
    ApiResponse::from_result(listings::search(&self.marketplace, query))
  }

  // --- bookings ---

  pub async fn request_booking(
    &self,
    helper_id: Uuid,
    listing_id: Uuid,
    message: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
  ) -> ApiResponse<Booking> {
    self.simulate_latency().await;
    ApiResponse::from_result(bookings::request_booking(
      &self.marketplace,
      helper_id,
      listing_id,
      message,
      start_date,
      end_date,
    ))
  }

  pub async fn confirm_booking(&self, host_id: Uuid, booking_id: Uuid) -> ApiResponse<Booking> {
    self.simulate_latency().await;
    ApiResponse::from_result(bookings::confirm_booking(&self.marketplace, host_id, booking_id))
  }

  pub async fn cancel_booking(&self, host_id: Uuid, booking_id: Uuid) -> ApiResponse<Booking> {
    self.simulate_latency().await;
    ApiResponse::from_result(bookings::cancel_booking(&self.marketplace, host_id, booking_id))
  }

  pub async fn check_in(&self, host_id: Uuid, booking_id: Uuid) -> ApiResponse<Booking> {
    self.simulate_latency().await;
    ApiResponse::from_result(bookings::check_in(&self.marketplace, host_id, booking_id))
  }

  pub async fn check_out(&self, host_id: Uuid, booking_id: Uuid) -> ApiResponse<Booking> {
    self.simulate_latency().await;
    ApiResponse::from_result(bookings::check_out(&self.marketplace, host_id, booking_id))
  }

  pub async fn report_issue(&self, host_id: Uuid, booking_id: Uuid) -> ApiResponse<Booking> {
    self.simulate_latency().await;
    ApiResponse::from_result(bookings::report_issue(&self.marketplace, host_id, booking_id))
  }

  pub async fn get_booking(&self, booking_id: Uuid) -> ApiResponse<BookingDetail> {
    self.simulate_latency().await;
    ApiResponse::from_result(bookings::get_booking(&self.marketplace, booking_id))
  }

  pub async fn bookings_for_helper(&self, helper_id: Uuid) -> ApiResponse<Vec<BookingDetail>> {
    self.simulate_latency().await;
    ApiResponse::from_result(bookings::bookings_for_helper(&self.marketplace, helper_id))
  }

  pub async fn bookings_for_host(&self, host_id: Uuid) -> ApiResponse<Vec<BookingDetail>> {
    self.simulate_latency().await;
    ApiResponse::from_result(bookings::bookings_for_host(&self.marketplace, host_id))
  }

  // --- messaging ---

  pub async fn open_conversation(
    &self,
    initiator_id: Uuid,
    other_id: Uuid,
    listing_id: Uuid,
  ) -> ApiResponse<Conversation> {
    self.simulate_latency().await;
    ApiResponse::from_result(messaging::open_conversation(
      &self.marketplace,
      initiator_id,
      other_id,
      listing_id,
    ))
  }

  pub async fn send_message(
    &self,
    conversation_id: Uuid,
    sender_id: Uuid,
    body: &str,
  ) -> ApiResponse<Message> {
    self.simulate_latency().await;
    ApiResponse::from_result(messaging::send_message(
      &self.marketplace,
      conversation_id,
      sender_id,
      body,
    ))
  }

  pub async fn thread(&self, conversation_id: Uuid, viewer_id: Uuid) -> ApiResponse<Vec<Message>> {
    self.simulate_latency().await;
    ApiResponse::from_result(messaging::thread(&self.marketplace, conversation_id, viewer_id))
  }

  pub async fn mark_thread_read(&self, conversation_id: Uuid, reader_id: Uuid) -> ApiResponse<usize> {
    self.simulate_latency().await;
    ApiResponse::from_result(messaging::mark_thread_read(
      &self.marketplace,
      conversation_id,
      reader_id,
    ))
  }

  pub async fn conversations_for(&self, user_id: Uuid) -> ApiResponse<Vec<Conversation>> {
    self.simulate_latency().await;
    ApiResponse::from_result(messaging::conversations_for(&self.marketplace, user_id))
  }

  pub async fn unread_count(&self, user_id: Uuid) -> ApiResponse<usize> {
    self.simulate_latency().await;
    ApiResponse::from_result(messaging::unread_count(&self.marketplace, user_id))
  }

  // --- reviews ---

  pub async fn create_review(
    &self,
    reviewer_id: Uuid,
    booking_id: Uuid,
    rating: u8,
    comment: Option<String>,
  ) -> ApiResponse<Review> {
    self.simulate_latency().await;
    ApiResponse::from_result(reviews::create_review(
      &self.marketplace,
      reviewer_id,
      booking_id,
      rating,
      comment,
    ))
  }

  pub async fn reviews_for(&self, reviewee_id: Uuid) -> ApiResponse<Vec<ReviewDetail>> {
    self.simulate_latency().await;
    ApiResponse::from_result(reviews::reviews_for(&self.marketplace, reviewee_id))
  }

  pub async fn average_rating(&self, reviewee_id: Uuid) -> ApiResponse<Option<f64>> {
    self.simulate_latency().await;
    ApiResponse::from_result(reviews::average_rating(&self.marketplace, reviewee_id))
  }

  // --- categories ---

  pub async fn categories(&self) -> ApiResponse<Vec<Category>> {
    self.simulate_latency().await;
    ApiResponse::from_result(categories::all_categories(&self.marketplace))
  }

  pub async fn category_by_slug(&self, slug: &str) -> ApiResponse<Category> {
    self.simulate_latency().await;
    ApiResponse::from_result(categories::category_by_slug(&self.marketplace, slug))
  }
}
