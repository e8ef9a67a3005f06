//! Chat transcript model for one (user, vendor) conversation.
//!
//! DESIGN
//! ======
//! The transcript is a single ordered log keyed by message id. Local sends
//! and inbound channel events both go through `ChatState::append`, which
//! drops ids it has already seen. That keeps our own published message from
//! showing twice when the provider echoes it back, and it means the stored
//! transcript is exactly what the user last saw.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{ChannelEvent, Member};
use crate::state::catalog::VendorRecord;
use crate::util::storage::{self, KeyValueStore, StorageError};

/// Realtime message type carrying chat text.
pub const CHAT_EVENT: &str = "chat";

/// Storage key, and channel name, for a conversation.
#[must_use]
pub fn chat_key(user_id: &str, vendor_id: u32) -> String {
    format!("chat-{user_id}-{vendor_id}")
}

/// Connection lifecycle of a chat session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Error,
}

/// A single chat message as rendered and stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_avatar: Option<String>,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub is_read: bool,
}

impl ChatMessage {
    /// Build a message from an inbound `chat` event.
    ///
    /// The publisher's message id in the payload wins over the provider's
    /// event id so echoes of our own sends line up with the local copy.
    /// Returns `None` for other event types or a payload without text.
    #[must_use]
    pub fn from_event(event: &ChannelEvent, current_user_id: &str) -> Option<Self> {
        if event.event_type != CHAT_EVENT {
            return None;
        }
        let text = event.data.get("text")?.as_str()?.to_owned();
        let id = event
            .data
            .get("id")
            .and_then(|v| v.as_str())
            .map_or_else(|| event.id.clone(), str::to_owned);
        let metadata = event.metadata.as_ref();
        Some(Self {
            id,
            sender_id: event.user_id.clone(),
            sender_name: metadata.map_or_else(|| "Unknown".to_owned(), |m| m.display_name.clone()),
            sender_avatar: metadata.and_then(|m| m.avatar.clone()),
            text,
            timestamp: event.timestamp,
            is_read: event.user_id == current_user_id,
        })
    }

    /// Two-letter avatar fallback for the sender.
    #[must_use]
    pub fn sender_initials(&self) -> String {
        self.sender_name.chars().take(2).collect()
    }

    /// Payload published on the channel for this message.
    #[must_use]
    pub fn payload(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "text": self.text,
            "timestamp": self.timestamp,
        })
    }
}

/// Build a locally composed message from `sender`.
#[must_use]
pub fn outbound_message(sender: &Member, text: &str, now_ms: i64) -> ChatMessage {
    ChatMessage {
        id: format!("msg-{}", uuid::Uuid::new_v4()),
        sender_id: sender.user_id.clone(),
        sender_name: sender.metadata.display_name.clone(),
        sender_avatar: sender.metadata.avatar.clone(),
        text: text.to_owned(),
        timestamp: now_ms,
        is_read: true,
    }
}

/// Greeting from the vendor that opens every new conversation.
#[must_use]
pub fn welcome_message(vendor: &VendorRecord, now_ms: i64) -> ChatMessage {
    ChatMessage {
        id: format!("welcome-{}", uuid::Uuid::new_v4()),
        sender_id: vendor.id.to_string(),
        sender_name: vendor.name.clone(),
        sender_avatar: Some(vendor.image.clone()),
        text: format!(
            "Hi! Thanks for your interest in {name}. I'd love to hear about your space and discuss how we might \
             work together. What type of property are you looking to partner with a {cuisine} {kind} for?",
            name = vendor.name,
            cuisine = vendor.cuisine.to_lowercase(),
            kind = vendor.vendor_type.to_lowercase(),
        ),
        timestamp: now_ms,
        is_read: false,
    }
}

/// State for the chat modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub status: ConnectionStatus,
    pub messages: Vec<ChatMessage>,
    /// Members reported by the last presence query.
    pub participants: Vec<Member>,
}

impl ChatState {
    /// Append `message` unless its id is already in the transcript.
    ///
    /// Returns `true` if the transcript changed.
    pub fn append(&mut self, message: ChatMessage) -> bool {
        if self.messages.iter().any(|m| m.id == message.id) {
            return false;
        }
        self.messages.push(message);
        true
    }
}

/// Load the stored transcript for `key`.
///
/// # Errors
///
/// Returns an error if storage fails or the stored JSON is malformed.
pub fn load_transcript(store: &dyn KeyValueStore, key: &str) -> Result<Option<Vec<ChatMessage>>, StorageError> {
    storage::load_json(store, key)
}

/// Overwrite the stored transcript for `key`.
///
/// # Errors
///
/// Returns an error if encoding or the storage write fails.
pub fn save_transcript(store: &dyn KeyValueStore, key: &str, messages: &[ChatMessage]) -> Result<(), StorageError> {
    storage::save_json(store, key, messages)
}
