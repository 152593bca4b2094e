//! Telegram webhook handling

use chrono::DateTime;
use furqan::domain::entities::InboundMessage;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Telegram webhook handler for incoming updates
#[derive(Debug, Default)]
pub struct TelegramWebhookHandler;

impl TelegramWebhookHandler {
    /// Create a new webhook handler
    pub fn new() -> Self {
        Self
    }

    /// Parse one raw update payload into an inbound message.
    ///
    /// Telegram pushes many update kinds through the same webhook
    /// (edited messages, channel posts, callback queries, ...); anything
    /// that is not a text message with a chat id yields `None` and must be
    /// acknowledged without action. Unparseable bodies also yield `None`.
    pub fn parse_update(&self, payload: &[u8]) -> Option<InboundMessage> {
        if payload.is_empty() {
            debug!("Ignoring empty webhook body");
            return None;
        }

        let update: TelegramUpdate = match serde_json::from_slice(payload) {
            Ok(update) => update,
            Err(e) => {
                warn!(error = %e, "Discarding unparseable webhook payload");
                return None;
            }
        };

        let Some(message) = update.message else {
            debug!(update_id = ?update.update_id, "Ignoring non-message update");
            return None;
        };

        let Some(text) = message.text else {
            debug!(update_id = ?update.update_id, "Ignoring message without text");
            return None;
        };

        let Some(chat_id) = message.chat.as_ref().and_then(extract_chat_id) else {
            debug!(update_id = ?update.update_id, "Ignoring message without chat id");
            return None;
        };

        let mut inbound = InboundMessage::new(chat_id, text);

        if let Some(sender) = message.from.and_then(|u| u.username.or(u.first_name)) {
            inbound = inbound.with_sender(sender);
        }
        if let Some(timestamp) = message.date.and_then(|d| DateTime::from_timestamp(d, 0)) {
            inbound = inbound.with_timestamp(timestamp);
        }

        Some(inbound)
    }
}

// Chat ids arrive as integers; tolerate strings that parse as integers.
fn extract_chat_id(chat: &TelegramChat) -> Option<i64> {
    match &chat.id {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    }
}

// Internal types for parsing Telegram updates

#[derive(Debug, Deserialize)]
struct TelegramUpdate {
    update_id: Option<i64>,
    message: Option<TelegramChatMessage>,
}

#[derive(Debug, Deserialize)]
struct TelegramChatMessage {
    text: Option<String>,
    chat: Option<TelegramChat>,
    from: Option<TelegramUser>,
    date: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct TelegramChat {
    id: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct TelegramUser {
    username: Option<String>,
    first_name: Option<String>,
}
