//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Search request failed: {0}")]
    Search(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}
