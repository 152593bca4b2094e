//! Search API and server probes

use anyhow::{bail, Context, Result};
use furqan::SearchResponse;
use reqwest::Client;
use serde::Deserialize;

/// Client for the ayah search API
pub struct SearchApiClient {
    client: Client,
    base_url: String,
}

impl SearchApiClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Run one search query, the same call the bot issues per message
    pub async fn search(&self, query: &str, lang: &str, k: u32, ctx: u32) -> Result<SearchResponse> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("query", query), ("lang", lang)])
            .query(&[("k", k), ("ctx", ctx)])
            .send()
            .await
            .context("Failed to reach the search API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("Search API error ({}): {}", status, body);
        }

        let response: SearchResponse = resp.json().await.context("Failed to parse search response")?;

        Ok(response)
    }
}

/// Health payload of a running relay server
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

/// Probe a running relay server
pub async fn server_health(server_url: &str) -> Result<HealthResponse> {
    let url = format!("{}/health", server_url.trim_end_matches('/'));
    let resp = Client::new()
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Failed to reach {}", url))?;

    if !resp.status().is_success() {
        bail!("Server health check failed ({})", resp.status());
    }

    let health: HealthResponse = resp.json().await.context("Failed to parse health response")?;

    Ok(health)
}
