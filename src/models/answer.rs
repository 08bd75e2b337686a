use serde::{Deserialize, Serialize};

use super::RetrievedSource;

/// The finalized answer to one query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StructuredResult {
    /// Answer text, or a raw preview of the stream when it was not JSON
    pub text_response: String,
    /// Product the agent selected; empty when unknown
    pub product: String,
    /// Reasoning trace; empty when unknown
    pub reasoning: String,
    /// Sources from the last retrieval event
    pub sources: Vec<RetrievedSource>,
    /// Wall-clock time from request start to stream close
    pub latency_seconds: f64,
}
