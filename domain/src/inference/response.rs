//! Inference response types
//!
//! Mirrors the non-streaming reply of an Ollama-compatible `/api/generate`
//! endpoint. Every numeric field is optional on the wire and defaults to zero,
//! so a partially filled reply still contributes to the statistics.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Text reported when a call failed at the transport or parse level.
pub const ERROR_RESPONSE: &str = "Error in response";

/// Text reported when a reply carried no `response` field.
pub const NO_RESPONSE: &str = "No response found";

/// A single parsed reply from the inference endpoint.
///
/// Durations are in nanoseconds as reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceResponse {
    /// Model that produced the reply
    pub model: Option<String>,
    /// Server-side creation timestamp (RFC 3339 with nanoseconds)
    pub created_at: Option<String>,
    /// Generated text
    pub response: Option<String>,
    pub total_duration: u64,
    pub load_duration: u64,
    pub prompt_eval_count: u64,
    pub prompt_eval_duration: u64,
    pub eval_count: u64,
    pub eval_duration: u64,
    /// Set for the sentinel produced by a failed call; never on the wire
    #[serde(skip)]
    pub degraded: bool,
}

impl InferenceResponse {
    /// Create a reply carrying only text (no timing data)
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            ..Default::default()
        }
    }

    /// The sentinel reply used in place of a failed call
    pub fn error() -> Self {
        Self {
            response: Some(ERROR_RESPONSE.to_string()),
            degraded: true,
            ..Default::default()
        }
    }

    /// Whether this is the sentinel for a failed call
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Generated text with surrounding whitespace removed.
    ///
    /// Falls back to [`NO_RESPONSE`] when the reply had no `response` field.
    pub fn text(&self) -> &str {
        self.response.as_deref().map(str::trim).unwrap_or(NO_RESPONSE)
    }

    /// Whether the trimmed text is exactly one character
    pub fn is_single_character(&self) -> bool {
        let mut chars = self.text().chars();
        chars.next().is_some() && chars.next().is_none()
    }

    /// Parse `created_at` as an RFC 3339 timestamp
    pub fn created_at_time(&self) -> Option<DateTime<FixedOffset>> {
        self.created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }

    /// `created_at` formatted to millisecond precision, keeping its UTC offset.
    ///
    /// Returns the raw string when it cannot be parsed and `None` when absent.
    pub fn created_at_display(&self) -> Option<String> {
        match self.created_at_time() {
            Some(t) => Some(t.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string()),
            None => self.created_at.clone(),
        }
    }
}
