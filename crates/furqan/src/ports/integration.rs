//! Platform Integration Port
//!
//! Abstract interface for integrating with messaging platforms such as
//! Telegram, Discord, Slack, etc.
//!
//! Implementations of this trait should live in separate crates
//! (e.g., furqan-integration-telegram).

use async_trait::async_trait;

use crate::domain::entities::InboundMessage;
use crate::domain::errors::DomainError;

/// Messaging platform interface
///
/// This trait abstracts the two platform touch points of the relay: turning
/// one raw webhook payload into an inbound message, and sending the reply
/// back to the originating chat.
#[async_trait]
pub trait ChatIntegration: Send + Sync {
    /// Get the integration name (e.g., "telegram")
    fn name(&self) -> &str;

    /// Parse one raw webhook payload into an inbound message.
    ///
    /// Returns `None` for payloads that must be acknowledged without
    /// action: unparseable bodies, non-message event types, and messages
    /// missing their text or chat identifier. The platform delivers such
    /// payloads routinely, so `None` is not an error.
    fn parse_update(&self, payload: &[u8]) -> Option<InboundMessage>;

    /// Send a message to the given chat. One attempt, no retry.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), DomainError>;
}
