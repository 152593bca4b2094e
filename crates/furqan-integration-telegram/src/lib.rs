//! Telegram Integration for Furqan
//!
//! This crate provides Telegram platform integration for the Furqan ayah
//! search bot.
//!
//! # Usage
//!
//! ```rust,ignore
//! use furqan_integration_telegram::{TelegramIntegration, TelegramConfig};
//!
//! let config = TelegramConfig::new("your-bot-token");
//! let integration = TelegramIntegration::new(config);
//! ```

mod client;
mod config;
mod integration;
mod webhook;

pub use client::TelegramClient;
pub use config::TelegramConfig;
pub use integration::TelegramIntegration;
pub use webhook::TelegramWebhookHandler;
