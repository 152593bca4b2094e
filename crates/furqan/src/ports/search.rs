//! Verse Search Service Port
//!
//! Abstract interface for the external ayah search endpoint.

use async_trait::async_trait;

use crate::domain::entities::SearchResponse;
use crate::domain::errors::DomainError;

/// Service interface for ayah search.
///
/// One outbound call per invocation; nothing is cached and failures are
/// not retried.
#[async_trait]
pub trait VerseSearchService: Send + Sync {
    /// Search ayat matching a query.
    ///
    /// The query text is the raw inbound message text, forwarded verbatim.
    async fn search(&self, query: &str) -> Result<SearchResponse, DomainError>;
}
