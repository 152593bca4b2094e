//! Ayah Search Adapter
//!
//! Implements the `VerseSearchService` port against the ayah search REST
//! endpoint using reqwest. One GET per invocation, single attempt.

use async_trait::async_trait;
use furqan::{DomainError, SearchResponse, VerseSearchService};
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

/// Search endpoint of the original deployment
pub const DEFAULT_SEARCH_URL: &str = "https://api.testvpsonline.online/search";

/// Configuration for the ayah search endpoint.
///
/// `lang`, `top_k` and `ctx` are fixed per deployment and sent with every
/// query; only the query text varies between requests.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub base_url: String,
    pub lang: String,
    pub top_k: u32,
    pub ctx: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SEARCH_URL.to_string(),
            lang: "ru".to_string(),
            top_k: 1,
            ctx: 1,
        }
    }
}

/// Client for the ayah search REST API
pub struct AyahSearchAgent {
    client: Client,
    config: SearchConfig,
}

impl AyahSearchAgent {
    /// Create a new search agent for the configured endpoint
    pub fn new(config: SearchConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[derive(Serialize)]
struct SearchQuery<'a> {
    query: &'a str,
    lang: &'a str,
    k: u32,
    ctx: u32,
}

#[async_trait]
impl VerseSearchService for AyahSearchAgent {
    async fn search(&self, query: &str) -> Result<SearchResponse, DomainError> {
        debug!(query = %query, url = %self.config.base_url, "Searching ayat");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&SearchQuery {
                query,
                lang: &self.config.lang,
                k: self.config.top_k,
                ctx: self.config.ctx,
            })
            .send()
            .await
            .map_err(|e| DomainError::Search(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(DomainError::Search(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Search(format!("Parse error: {}", e)))?;

        Ok(parsed)
    }
}
