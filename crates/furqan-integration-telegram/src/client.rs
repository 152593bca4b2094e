//! Telegram Bot API client wrapper

use teloxide::prelude::*;
use teloxide::types::{ChatId, Message as TelegramMessage};
use teloxide::{Bot, RequestError};
use tracing::{debug, error};

use crate::config::TelegramConfig;

/// Telegram Bot API client
pub struct TelegramClient {
    bot: Bot,
    #[allow(dead_code)]
    config: TelegramConfig,
}

impl TelegramClient {
    /// Create a new Telegram client
    pub fn new(config: TelegramConfig) -> Self {
        let bot = match &config.api_url {
            Some(url) => Bot::new(config.token.clone()).set_api_url(url.clone()),
            None => Bot::new(config.token.clone()),
        };
        Self { bot, config }
    }

    /// Send a message to a chat
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
    ) -> Result<TelegramMessage, RequestError> {
        debug!(chat_id = %chat_id, text_len = %text.len(), "Sending message to Telegram");

        let message = self
            .bot
            .send_message(ChatId(chat_id), text)
            .send()
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send Telegram message"))?;

        Ok(message)
    }

    /// Get the underlying bot handle for advanced operations
    pub fn bot(&self) -> &Bot {
        &self.bot
    }
}
