// marketplace/src/models/message.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tabula::Entity;

/// Groups the messages two users exchange about one listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
  pub id: Uuid,
  pub listing_id: Uuid,
  pub participants: [Uuid; 2],
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Conversation {
  pub fn new(listing_id: Uuid, a: Uuid, b: Uuid) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      listing_id,
      participants: [a, b],
      created_at: now,
      updated_at: now,
    }
  }

  pub fn involves(&self, user_id: Uuid) -> bool {
    self.participants.contains(&user_id)
  }

  /// The participant on the other side of `user_id`, when `user_id` is one.
  pub fn counterpart(&self, user_id: Uuid) -> Option<Uuid> {
    match self.participants {
      [a, b] if a == user_id => Some(b),
      [a, b] if b == user_id => Some(a),
      _ => None,
    }
  }

  /// Participant-order-insensitive identity for conversation reuse.
  pub fn is_between(&self, listing_id: Uuid, a: Uuid, b: Uuid) -> bool {
    self.listing_id == listing_id && self.involves(a) && self.involves(b) && a != b
  }
}

impl Entity for Conversation {
  const COLLECTION: &'static str = "conversations";

  fn id(&self) -> Uuid {
    self.id
  }

  fn touch(&mut self, at: DateTime<Utc>) {
    self.updated_at = at;
  }
}

/// Append-only; `read_at` is the only field that mutates after creation
/// (stamped when the receiving participant views the thread).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
  pub id: Uuid,
  pub conversation_id: Uuid,
  pub sender_id: Uuid,
  pub receiver_id: Uuid,
  pub body: String,
  pub read_at: Option<DateTime<Utc>>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Message {
  pub fn new(conversation_id: Uuid, sender_id: Uuid, receiver_id: Uuid, body: &str) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      conversation_id,
      sender_id,
      receiver_id,
      body: body.to_string(),
      read_at: None,
      created_at: now,
      updated_at: now,
    }
  }

  pub fn is_unread(&self) -> bool {
    self.read_at.is_none()
  }
}

impl Entity for Message {
  const COLLECTION: &'static str = "messages";

  fn id(&self) -> Uuid {
    self.id
  }

  fn touch(&mut self, at: DateTime<Utc>) {
    self.updated_at = at;
  }
}
