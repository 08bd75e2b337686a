//! Line and payload parsing for the answer stream

use crate::models::RetrievedSource;
use crate::sse::events::{SseLine, SseParseError};
use serde_json::Value;

use crate::sse::payloads::{source_from_value, DeltaPayload};

/// Parse a single SSE line into its component type
pub fn parse_sse_line(line: &str) -> SseLine {
    if line.is_empty() {
        return SseLine::Empty;
    }

    if let Some(rest) = line.strip_prefix("event:") {
        return SseLine::Event(rest.trim().to_string());
    }

    if let Some(rest) = line.strip_prefix("data:") {
        return SseLine::Data(rest.trim().to_string());
    }

    if let Some(stripped) = line.strip_prefix(':') {
        return SseLine::Comment(stripped.trim().to_string());
    }

    if line.trim().is_empty() {
        return SseLine::Empty;
    }

    // Unknown line format - treat as comment
    SseLine::Comment(line.to_string())
}

/// Parse the data of a knowledge-retrieved event as a JSON array of sources.
///
/// Any JSON array is accepted; only the array itself must parse.
pub fn parse_sources(event_type: &str, data: &str) -> Result<Vec<RetrievedSource>, SseParseError> {
    let items: Vec<Value> =
        serde_json::from_str(data).map_err(|e| SseParseError::InvalidJson {
            event_type: event_type.to_string(),
            source: e.to_string(),
        })?;

    Ok(items.iter().map(source_from_value).collect())
}

/// Parse the data of an answer-delta event, returning the delta text.
///
/// A missing or null `delta` field yields an empty string.
pub fn parse_delta(event_type: &str, data: &str) -> Result<String, SseParseError> {
    let payload: DeltaPayload =
        serde_json::from_str(data).map_err(|e| SseParseError::InvalidJson {
            event_type: event_type.to_string(),
            source: e.to_string(),
        })?;

    Ok(payload.delta.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sse::events::{ANSWER_DELTA_GENERATED, KNOWLEDGE_RETRIEVED};

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(parse_sse_line(""), SseLine::Empty);
        assert_eq!(parse_sse_line("   "), SseLine::Empty);
    }

    #[test]
    fn test_parse_event_line() {
        assert_eq!(
            parse_sse_line("event: search-workflow-answer-delta-generated"),
            SseLine::Event(ANSWER_DELTA_GENERATED.to_string())
        );
        assert_eq!(
            parse_sse_line("event:search-workflow-knowledge-retrieved"),
            SseLine::Event(KNOWLEDGE_RETRIEVED.to_string())
        );
        assert_eq!(
            parse_sse_line("event:   padded  "),
            SseLine::Event("padded".to_string())
        );
    }

    #[test]
    fn test_parse_data_line() {
        assert_eq!(
            parse_sse_line("data: {\"delta\": \"hola\"}"),
            SseLine::Data("{\"delta\": \"hola\"}".to_string())
        );
        assert_eq!(
            parse_sse_line("data:[]  "),
            SseLine::Data("[]".to_string())
        );
    }

    #[test]
    fn test_parse_comment_and_unknown_lines() {
        assert_eq!(
            parse_sse_line(": keepalive"),
            SseLine::Comment("keepalive".to_string())
        );
        assert_eq!(
            parse_sse_line("id: 42"),
            SseLine::Comment("id: 42".to_string())
        );
        // Prefixes are matched at line start only
        assert_eq!(
            parse_sse_line(" data: x"),
            SseLine::Comment(" data: x".to_string())
        );
    }

    #[test]
    fn test_parse_delta() {
        assert_eq!(
            parse_delta(ANSWER_DELTA_GENERATED, r#"{"delta":"Hola "}"#).unwrap(),
            "Hola "
        );
        assert_eq!(parse_delta(ANSWER_DELTA_GENERATED, r#"{}"#).unwrap(), "");
        assert_eq!(
            parse_delta(ANSWER_DELTA_GENERATED, r#"{"delta":null}"#).unwrap(),
            ""
        );
    }

    #[test]
    fn test_parse_delta_invalid_json() {
        let err = parse_delta(ANSWER_DELTA_GENERATED, r#"{"delta": "unterminated"#).unwrap_err();
        assert!(matches!(err, SseParseError::InvalidJson { .. }));
    }

    #[test]
    fn test_parse_delta_non_object() {
        assert!(parse_delta(ANSWER_DELTA_GENERATED, r#""just a string""#).is_err());
    }

    #[test]
    fn test_parse_sources() {
        let data = r#"[
            {"chunk_external_id":"a","_additional":{"distance":0.1},"text":"uno"},
            {"chunk_external_id":"b","text":"dos"}
        ]"#;
        let sources = parse_sources(KNOWLEDGE_RETRIEVED, data).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].chunk_id, "a");
        assert_eq!(sources[0].distance, 0.1);
        assert_eq!(sources[1].distance, 0.0);
        assert_eq!(sources[1].text, "dos");
    }

    #[test]
    fn test_parse_sources_mistyped_fields_still_parse() {
        let sources =
            parse_sources(KNOWLEDGE_RETRIEVED, r#"[{"chunk_external_id":7,"text":"x"}, 3]"#)
                .unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].chunk_id, "7");
        assert_eq!(sources[0].text, "x");
        assert_eq!(sources[1], RetrievedSource::default());
    }

    #[test]
    fn test_parse_sources_empty_array() {
        assert!(parse_sources(KNOWLEDGE_RETRIEVED, "[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_sources_rejects_object() {
        let err = parse_sources(KNOWLEDGE_RETRIEVED, r#"{"chunk_external_id":"a"}"#).unwrap_err();
        match err {
            SseParseError::InvalidJson { event_type, .. } => {
                assert_eq!(event_type, KNOWLEDGE_RETRIEVED);
            }
        }
    }
}
