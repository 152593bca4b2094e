//! Application Services

pub mod relay;

pub use relay::{RelayOutcome, RelayService};
