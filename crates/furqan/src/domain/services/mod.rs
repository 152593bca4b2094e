//! Domain Services
//!
//! Pure domain logic with no side effects.

pub mod format;

pub use format::{format_results, NOTHING_FOUND_REPLY, SEARCH_ERROR_REPLY};
