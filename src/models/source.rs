use serde::{Deserialize, Serialize};

/// A knowledge-base passage the agent retrieved to ground its answer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RetrievedSource {
    /// External chunk identifier (`chunk_external_id` on the wire)
    pub chunk_id: String,
    /// Vector distance to the query; 0.0 when the service omits it
    pub distance: f64,
    /// Passage text
    pub text: String,
}

impl RetrievedSource {
    pub fn new(chunk_id: impl Into<String>, distance: f64, text: impl Into<String>) -> Self {
        Self {
            chunk_id: chunk_id.into(),
            distance,
            text: text.into(),
        }
    }
}
