//! SSE payload deserialization structs
//!
//! Contains internal structs used to deserialize JSON data payloads
//! from the answer stream.

use serde::Deserialize;
use serde_json::Value;

use crate::models::RetrievedSource;

/// Answer delta payload: `{"delta": "..."}`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DeltaPayload {
    #[serde(default)]
    pub delta: Option<String>,
}

/// Read one element of the knowledge-retrieved array.
///
/// Fields are read one by one: a missing, null or mistyped field falls back
/// to its default, and non-string ids or texts keep their JSON rendering.
pub(crate) fn source_from_value(value: &Value) -> RetrievedSource {
    let distance = value
        .get("_additional")
        .and_then(|additional| additional.get("distance"))
        .and_then(Value::as_f64)
        .unwrap_or_default();

    RetrievedSource {
        chunk_id: text_field(value, "chunk_external_id"),
        distance,
        text: text_field(value, "text"),
    }
}

fn text_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}
