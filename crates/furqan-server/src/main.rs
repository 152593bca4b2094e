use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

mod adapters;
mod application;
mod config;
mod routes;

use adapters::AyahSearchAgent;
use application::RelayService;
use config::ServerConfig;
use furqan_integration_telegram::TelegramIntegration;

/// Type alias for the relay wired to its concrete adapters
pub type AppRelayService = RelayService<AyahSearchAgent, TelegramIntegration>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<AppRelayService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Furqan relay is running - ayat flow from search to chat".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(search_url = %config.search.base_url, "Furqan server initializing");

    let search = Arc::new(AyahSearchAgent::new(config.search.clone()));
    let telegram = Arc::new(TelegramIntegration::new(config.telegram.clone()));
    let relay = Arc::new(RelayService::new(search, telegram));

    let state = AppState { relay };

    let router = Router::new()
        .merge(routes::webhook::router())
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "Furqan server listening");
    axum::serve(listener, router).await?;

    Ok(())
}
