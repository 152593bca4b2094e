//! Furqan CLI - operator tooling for the ayah search bot
//!
//! Query the search API the way the bot does, send one-off Telegram
//! messages to verify the token, and probe a running relay server.

mod api;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;

use api::SearchApiClient;
use config::Config;
use furqan::{format_results, ChatIntegration};
use furqan_integration_telegram::{TelegramConfig, TelegramIntegration};

#[derive(Parser)]
#[command(name = "furqan")]
#[command(about = "Furqan CLI - ayah search bot tooling", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store the bot token used by `send`
    Login {
        /// Bot token (will prompt if not provided)
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Query the ayah search API and print the bot's reply
    Search {
        /// Query text
        query: String,
        /// Search language
        #[arg(short, long)]
        lang: Option<String>,
        /// Number of hits to request
        #[arg(short = 'k', long)]
        top_k: Option<u32>,
    },

    /// Send a one-off message through the Telegram bot
    Send {
        /// Target chat id
        chat_id: i64,
        /// Message text
        text: String,
    },

    /// Check a running relay server
    Health {
        /// Server URL (defaults to the configured one)
        #[arg(long)]
        url: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { token } => cmd_login(token),
        Commands::Search { query, lang, top_k } => cmd_search(query, lang, top_k).await,
        Commands::Send { chat_id, text } => cmd_send(chat_id, text).await,
        Commands::Health { url } => cmd_health(url).await,
        Commands::Config => cmd_config(),
    }
}

fn cmd_login(token: Option<String>) -> Result<()> {
    let token = match token {
        Some(token) => token,
        None => Password::new()
            .with_prompt("Bot token")
            .interact()
            .context("Failed to read token")?,
    };

    let mut config = Config::load()?;
    config.set_bot_token(token);
    config.save()?;

    println!("{} Token saved to {:?}", "✓".green(), Config::config_path()?);
    Ok(())
}

async fn cmd_search(query: String, lang: Option<String>, top_k: Option<u32>) -> Result<()> {
    let config = Config::load()?;
    let client = SearchApiClient::new(&config.search_url);

    let lang = lang.unwrap_or_else(|| "ru".to_string());
    let response = client.search(&query, &lang, top_k.unwrap_or(1), 1).await?;

    println!("{}", format_results(Some(&response)));
    Ok(())
}

async fn cmd_send(chat_id: i64, text: String) -> Result<()> {
    let config = Config::load()?;
    let token = config
        .bot_token
        .or_else(|| std::env::var("BOT_TOKEN").ok())
        .context("No bot token configured. Run `furqan login` or set BOT_TOKEN")?;

    let integration = TelegramIntegration::new(TelegramConfig::new(token));
    integration.send_message(chat_id, &text).await?;

    println!("{} Message sent to chat {}", "✓".green(), chat_id);
    Ok(())
}

async fn cmd_health(url: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let url = url.unwrap_or(config.server_url);

    let health = api::server_health(&url).await?;

    println!(
        "{} [{}] {} (v{})",
        "✓".green(),
        health.status,
        health.message,
        health.version
    );
    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Current configuration:".bold());
    println!("  config file: {:?}", Config::config_path()?);
    println!("  search_url:  {}", config.search_url);
    println!("  server_url:  {}", config.server_url);
    match &config.bot_token {
        Some(token) => {
            let tail = &token[token.len().saturating_sub(4)..];
            println!("  bot_token:   ***{}", tail);
        }
        None => println!("  bot_token:   {}", "not set".yellow()),
    }

    Ok(())
}
