//! Inbound Message Entity
//!
//! Represents one chat message extracted from a platform webhook payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message received from a messaging platform webhook.
///
/// Constructed from a single inbound payload and discarded once the
/// request has been answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Platform-specific conversation identifier
    pub chat_id: i64,
    /// Message text, forwarded verbatim as the search query
    pub text: String,
    /// Sender's display name, when the platform carries one
    pub sender: Option<String>,
    /// When the message was sent, when the platform carries it
    pub timestamp: Option<DateTime<Utc>>,
}

impl InboundMessage {
    /// Create a new inbound message
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            sender: None,
            timestamp: None,
        }
    }

    /// Set the sender name
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Set the timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}
