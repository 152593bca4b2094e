//! Domain Entities

pub mod message;
pub mod verse;

pub use message::InboundMessage;
pub use verse::{SearchResponse, VerseHit};
