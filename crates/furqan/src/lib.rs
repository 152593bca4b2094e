//! Furqan Domain Library
//!
//! Core domain types and interfaces for the Furqan ayah search bot.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business types and logic
//!   - `entities/`: Core domain models (InboundMessage, VerseHit, SearchResponse)
//!   - `services/`: Pure domain services (result formatting)
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `search`: Verse search service interface
//!   - `integration`: Messaging platform interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use furqan::{InboundMessage, SearchResponse, format_results};
//! use furqan::ports::{ChatIntegration, VerseSearchService};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    format_results, DomainError, InboundMessage, SearchResponse, VerseHit, NOTHING_FOUND_REPLY,
    SEARCH_ERROR_REPLY,
};
pub use ports::{ChatIntegration, VerseSearchService};
