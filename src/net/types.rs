//! Shared DTOs for the identity and realtime provider boundaries.
//!
//! DESIGN
//! ======
//! These types mirror the JSON shapes the hosted providers hand back, so
//! serde round-trips stay lossless. Only the fields the app consumes are
//! modelled.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Provider-issued user identifier.
    pub id: String,
    pub email: String,
    /// May be empty when the provider has no name on file.
    #[serde(default)]
    pub display_name: String,
}

impl AuthUser {
    /// Name shown to other chat participants, falling back to the email.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.display_name.trim().is_empty() { &self.email } else { &self.display_name }
    }
}

/// Display metadata attached to a channel member.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberMetadata {
    pub display_name: String,
    pub user_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Identity presented when subscribing or publishing on a channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub user_id: String,
    pub metadata: MemberMetadata,
}

/// A message delivered by the realtime provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelEvent {
    /// Provider message id. Publishers may choose it.
    pub id: String,
    /// Application message type, e.g. `"chat"`.
    #[serde(rename = "type")]
    pub event_type: String,
    pub user_id: String,
    #[serde(default)]
    pub metadata: Option<MemberMetadata>,
    #[serde(default)]
    pub data: serde_json::Value,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}
