//! ChatIntegration implementation for Telegram

use async_trait::async_trait;
use furqan::domain::entities::InboundMessage;
use furqan::domain::errors::DomainError;
use furqan::ports::integration::ChatIntegration;
use tracing::debug;

use crate::client::TelegramClient;
use crate::config::TelegramConfig;
use crate::webhook::TelegramWebhookHandler;

/// Telegram integration implementing the ChatIntegration trait
pub struct TelegramIntegration {
    client: TelegramClient,
    webhook: TelegramWebhookHandler,
}

impl TelegramIntegration {
    /// Create a new Telegram integration
    pub fn new(config: TelegramConfig) -> Self {
        let client = TelegramClient::new(config);
        Self {
            client,
            webhook: TelegramWebhookHandler::new(),
        }
    }
}

#[async_trait]
impl ChatIntegration for TelegramIntegration {
    fn name(&self) -> &str {
        "telegram"
    }

    fn parse_update(&self, payload: &[u8]) -> Option<InboundMessage> {
        self.webhook.parse_update(payload)
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), DomainError> {
        debug!(chat_id = %chat_id, text_len = %text.len(), "Relaying reply to Telegram");

        self.client
            .send_message(chat_id, text)
            .await
            .map_err(|e| DomainError::ExternalService(format!("Telegram API error: {}", e)))?;

        Ok(())
    }
}
