//! Telegram configuration

use url::Url;

/// Configuration for Telegram integration
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Telegram bot token
    pub token: String,
    /// Bot API base URL override (for self-hosted Bot API servers)
    pub api_url: Option<Url>,
}

impl TelegramConfig {
    /// Create a new Telegram configuration with just a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: None,
        }
    }

    /// Override the Bot API base URL
    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = Some(api_url);
        self
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: None,
        }
    }
}
