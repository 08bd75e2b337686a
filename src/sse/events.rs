//! SSE line and event-type definitions
//!
//! Contains the `SseLine` tag type produced by the frame reader, the event
//! type tags the answer stream uses, and the per-frame parse error.

use std::fmt;

/// Event tag carrying the retrieved knowledge-base passages.
pub const KNOWLEDGE_RETRIEVED: &str = "search-workflow-knowledge-retrieved";

/// Event tag carrying one fragment of the answer text.
pub const ANSWER_DELTA_GENERATED: &str = "search-workflow-answer-delta-generated";

/// Represents a parsed SSE line
#[derive(Debug, Clone, PartialEq)]
pub enum SseLine {
    /// Event type declaration (e.g., "event: search-workflow-answer-delta-generated")
    Event(String),
    /// Data payload (e.g., "data: {\"delta\": \"Hola\"}")
    Data(String),
    /// Blank line
    Empty,
    /// Comment or any line matching neither prefix
    Comment(String),
}

impl SseLine {
    /// Whether this line carries an event type or a data payload.
    pub fn is_meaningful(&self) -> bool {
        matches!(self, SseLine::Event(_) | SseLine::Data(_))
    }
}

/// The event types the answer stream distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEventKind {
    /// `search-workflow-knowledge-retrieved`
    KnowledgeRetrieved,
    /// `search-workflow-answer-delta-generated`
    AnswerDelta,
}

impl StreamEventKind {
    /// Match an event tag exactly (case-sensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            KNOWLEDGE_RETRIEVED => Some(StreamEventKind::KnowledgeRetrieved),
            ANSWER_DELTA_GENERATED => Some(StreamEventKind::AnswerDelta),
            _ => None,
        }
    }

    /// The wire tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            StreamEventKind::KnowledgeRetrieved => KNOWLEDGE_RETRIEVED,
            StreamEventKind::AnswerDelta => ANSWER_DELTA_GENERATED,
        }
    }
}

/// SSE payload parsing errors
///
/// These never abort a stream; the dispatcher inspects and discards them.
#[derive(Debug, Clone, PartialEq)]
pub enum SseParseError {
    /// Invalid JSON in data payload
    InvalidJson { event_type: String, source: String },
}

impl fmt::Display for SseParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SseParseError::InvalidJson { event_type, source } => {
                write!(f, "Invalid JSON for event '{}': {}", event_type, source)
            }
        }
    }
}

impl std::error::Error for SseParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_from_tag() {
        assert_eq!(
            StreamEventKind::from_tag("search-workflow-knowledge-retrieved"),
            Some(StreamEventKind::KnowledgeRetrieved)
        );
        assert_eq!(
            StreamEventKind::from_tag("search-workflow-answer-delta-generated"),
            Some(StreamEventKind::AnswerDelta)
        );
        assert_eq!(StreamEventKind::from_tag("content"), None);
    }

    #[test]
    fn test_event_kind_tags_are_case_sensitive() {
        assert_eq!(
            StreamEventKind::from_tag("Search-Workflow-Answer-Delta-Generated"),
            None
        );
        assert_eq!(StreamEventKind::AnswerDelta.tag(), ANSWER_DELTA_GENERATED);
        assert_eq!(StreamEventKind::KnowledgeRetrieved.tag(), KNOWLEDGE_RETRIEVED);
    }

    #[test]
    fn test_sse_line_is_meaningful() {
        assert!(SseLine::Event("x".to_string()).is_meaningful());
        assert!(SseLine::Data("{}".to_string()).is_meaningful());
        assert!(!SseLine::Empty.is_meaningful());
        assert!(!SseLine::Comment("keepalive".to_string()).is_meaningful());
    }

    #[test]
    fn test_sse_parse_error_display() {
        let err = SseParseError::InvalidJson {
            event_type: ANSWER_DELTA_GENERATED.to_string(),
            source: "expected value".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("Invalid JSON"));
        assert!(display.contains(ANSWER_DELTA_GENERATED));
    }
}
