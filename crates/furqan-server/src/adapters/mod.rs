//! Infrastructure Adapters
//!
//! Concrete implementations of the domain ports.

pub mod search;

pub use search::{AyahSearchAgent, SearchConfig};
