//! Per-query answer accumulation.
//!
//! The accumulator collects answer deltas and the retrieved sources while a
//! stream is drained, then interprets the concatenated text as the agent's
//! terminal JSON answer `{text_response, product, reasoning}`.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::models::{RetrievedSource, StructuredResult};
use crate::traits::ResponseSink;

/// Characters of raw stream text kept as `text_response` when the
/// concatenated answer is not a JSON object.
pub const FALLBACK_PREVIEW_CHARS: usize = 500;

/// Mutable state of one query's answer.
#[derive(Debug, Clone, Default)]
pub struct ResponseAccumulator {
    text_buffer: String,
    sources: Vec<RetrievedSource>,
}

impl ResponseAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenation of every delta received so far.
    pub fn text_buffer(&self) -> &str {
        &self.text_buffer
    }

    /// Sources from the most recent retrieval event.
    pub fn sources(&self) -> &[RetrievedSource] {
        &self.sources
    }

    /// Build the structured answer from the drained stream.
    ///
    /// Does not mutate; calling it twice yields the same content.
    pub fn finalize(&self, latency: Duration) -> StructuredResult {
        let mut result = match serde_json::from_str::<Value>(&self.text_buffer) {
            Ok(Value::Object(answer)) => StructuredResult {
                text_response: string_field(&answer, "text_response"),
                product: string_field(&answer, "product"),
                reasoning: string_field(&answer, "reasoning"),
                ..Default::default()
            },
            Ok(_) => {
                debug!("Answer JSON is not an object, falling back to raw preview");
                self.fallback()
            }
            Err(e) => {
                debug!("Answer is not valid JSON ({}), falling back to raw preview", e);
                self.fallback()
            }
        };

        result.sources = self.sources.clone();
        result.latency_seconds = latency.as_secs_f64();
        result
    }

    fn fallback(&self) -> StructuredResult {
        StructuredResult {
            text_response: self.text_buffer.chars().take(FALLBACK_PREVIEW_CHARS).collect(),
            ..Default::default()
        }
    }
}

impl ResponseSink for ResponseAccumulator {
    fn append_delta(&mut self, delta: &str) {
        self.text_buffer.push_str(delta);
    }

    fn replace_sources(&mut self, sources: Vec<RetrievedSource>) {
        self.sources = sources;
    }
}

/// Read an optional field as text: strings as-is, null or missing as empty,
/// anything else as its JSON rendering.
fn string_field(answer: &serde_json::Map<String, Value>, key: &str) -> String {
    match answer.get(key) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}
