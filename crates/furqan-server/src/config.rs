//! Server configuration
//!
//! All configuration is read once from the process environment at startup
//! and handed to the clients as explicit structs; nothing reads the
//! environment after boot.

use anyhow::{Context, Result};
use furqan_integration_telegram::TelegramConfig;

use crate::adapters::search::SearchConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Configuration for the webhook server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,
    /// Telegram credential and API settings
    pub telegram: TelegramConfig,
    /// Search endpoint settings
    pub search: SearchConfig,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// `BOT_TOKEN` is required; everything else has a default.
    /// Recognized variables: `BOT_TOKEN`, `TELEGRAM_API_URL`,
    /// `SEARCH_API_URL`, `SEARCH_LANG`, `BIND_ADDR`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("BOT_TOKEN").context("BOT_TOKEN is not set")?;

        let mut telegram = TelegramConfig::new(token);
        if let Ok(raw) = std::env::var("TELEGRAM_API_URL") {
            let api_url = raw
                .parse()
                .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", raw))?;
            telegram = telegram.with_api_url(api_url);
        }

        let mut search = SearchConfig::default();
        if let Ok(base_url) = std::env::var("SEARCH_API_URL") {
            search.base_url = base_url;
        }
        if let Ok(lang) = std::env::var("SEARCH_LANG") {
            search.lang = lang;
        }

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            bind_addr,
            telegram,
            search,
        })
    }
}
