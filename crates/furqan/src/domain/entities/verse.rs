//! Verse Search Entities
//!
//! The search API response shape. Result records are kept as opaque JSON
//! values: `surah` and `ayah` are untyped in the observed payloads, so they
//! are stringified at format time rather than given numeric semantics.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// One search hit: an ayah locator plus its display text.
///
/// Every field defaults to JSON null when absent from the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseHit {
    #[serde(default)]
    pub surah: Value,
    #[serde(default)]
    pub ayah: Value,
    #[serde(default)]
    pub text: Value,
}

impl VerseHit {
    /// Create a hit from raw JSON values
    pub fn new(surah: impl Into<Value>, ayah: impl Into<Value>, text: impl Into<Value>) -> Self {
        Self {
            surah: surah.into(),
            ayah: ayah.into(),
            text: text.into(),
        }
    }

    /// Render the hit as one reply line: `"{surah}.{ayah} {text}"`
    pub fn display_line(&self) -> String {
        format!(
            "{}.{} {}",
            display(&self.surah),
            display(&self.ayah),
            display(&self.text)
        )
    }
}

/// Response body of the search endpoint.
///
/// An absent or null `results` key deserializes to `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<VerseHit>>,
}

impl SearchResponse {
    /// Build a response from a list of hits
    pub fn from_hits(hits: Vec<VerseHit>) -> Self {
        Self {
            results: Some(hits),
        }
    }
}

// Null renders as an empty string, strings render without quoting,
// anything else keeps its JSON rendering.
fn display(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}
