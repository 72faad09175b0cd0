// marketplace/src/services/messaging.rs

//! Conversations and messages. Messages are append-only; `read_at` is the
//! only field that ever mutates, when the receiving participant views the
//! thread.

use chrono::Utc;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::{Conversation, Message};
use crate::state::Marketplace;

/// Finds the existing conversation between the two users about a listing,
/// or opens a new one. Participant order does not matter.
#[instrument(name = "messaging::open_conversation", skip(marketplace), fields(%initiator_id, %other_id, %listing_id), err(Display))]
pub fn open_conversation(
  marketplace: &Marketplace,
  initiator_id: Uuid,
  other_id: Uuid,
  listing_id: Uuid,
) -> Result<Conversation> {
  if initiator_id == other_id {
    return Err(AppError::Validation("Cannot open a conversation with yourself".to_string()));
  }
  for participant in [initiator_id, other_id] {
    if marketplace.users.find(participant)?.is_none() {
      return Err(AppError::NotFound(format!("User {}", participant)));
    }
  }
  if marketplace.listings.find(listing_id)?.is_none() {
    return Err(AppError::NotFound(format!("Listing {}", listing_id)));
  }

  if let Some(existing) = marketplace
    .conversations
    .filtered(&|conversation: &Conversation| {
      conversation.is_between(listing_id, initiator_id, other_id)
    })?
    .into_iter()
    .next()
  {
    return Ok(existing);
  }

  let conversation = Conversation::new(listing_id, initiator_id, other_id);
  marketplace.conversations.insert(conversation.clone())?;
  debug!(conversation_id = %conversation.id, "conversation opened");
  Ok(conversation)
}

/// Appends a message from one participant to the other.
#[instrument(name = "messaging::send", skip(marketplace, body), fields(%conversation_id, %sender_id), err(Display))]
pub fn send_message(
  marketplace: &Marketplace,
  conversation_id: Uuid,
  sender_id: Uuid,
  body: &str,
) -> Result<Message> {
  if body.trim().is_empty() {
    return Err(AppError::Validation("Message body cannot be empty".to_string()));
  }
  let conversation = marketplace
    .conversations
    .find(conversation_id)?
    .ok_or_else(|| AppError::NotFound(format!("Conversation {}", conversation_id)))?;
  let receiver_id = conversation
    .counterpart(sender_id)
    .ok_or_else(|| AppError::Forbidden("Only participants can send messages".to_string()))?;

  let message = Message::new(conversation_id, sender_id, receiver_id, body);
  marketplace.messages.insert(message.clone())?;
  Ok(message)
}

/// The messages of a conversation, oldest first. Only participants can read
/// a thread.
pub fn thread(marketplace: &Marketplace, conversation_id: Uuid, viewer_id: Uuid) -> Result<Vec<Message>> {
  let conversation = marketplace
    .conversations
    .find(conversation_id)?
    .ok_or_else(|| AppError::NotFound(format!("Conversation {}", conversation_id)))?;
  if !conversation.involves(viewer_id) {
    return Err(AppError::Forbidden("Only participants can read a thread".to_string()));
  }

  let mut messages = marketplace
    .messages
    .filtered(&|message: &Message| message.conversation_id == conversation_id)?;
  messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
  Ok(messages)
}

/// Stamps `read_at` on every unread message addressed to `reader_id` in the
/// thread. Returns how many messages were marked.
#[instrument(name = "messaging::mark_read", skip(marketplace), fields(%conversation_id, %reader_id), err(Display))]
pub fn mark_thread_read(
  marketplace: &Marketplace,
  conversation_id: Uuid,
  reader_id: Uuid,
) -> Result<usize> {
  let conversation = marketplace
    .conversations
    .find(conversation_id)?
    .ok_or_else(|| AppError::NotFound(format!("Conversation {}", conversation_id)))?;
  if !conversation.involves(reader_id) {
    return Err(AppError::Forbidden("Only participants can mark a thread read".to_string()));
  }

  let unread: Vec<Uuid> = marketplace
    .messages
    .filtered(&|message: &Message| {
      message.conversation_id == conversation_id
        && message.receiver_id == reader_id
        && message.is_unread()
    })?
    .into_iter()
    .map(|message| message.id)
    .collect();

  let read_at = Utc::now();
  for message_id in &unread {
    marketplace
      .messages
      .update(*message_id, |message| message.read_at = Some(read_at))?;
  }
  debug!(marked = unread.len(), "thread marked read");
  Ok(unread.len())
}

/// Every conversation a user participates in, most recently created first.
pub fn conversations_for(marketplace: &Marketplace, user_id: Uuid) -> Result<Vec<Conversation>> {
  let mut conversations = marketplace
    .conversations
    .filtered(&|conversation: &Conversation| conversation.involves(user_id))?;
  conversations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
  Ok(conversations)
}

/// Unread messages addressed to a user, across all conversations.
pub fn unread_count(marketplace: &Marketplace, user_id: Uuid) -> Result<usize> {
  Ok(
    marketplace
      .messages
      .filtered(&|message: &Message| message.receiver_id == user_id && message.is_unread())?
      .len(),
  )
}
