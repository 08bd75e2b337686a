//! SSE (Server-Sent Events) answer stream handling
//!
//! The agent service streams its answer as `event:`/`data:` line pairs:
//! - `event: <type>` - sets the current event type (sticky)
//! - `data: <json>` - payload for the current event type
//! - Empty lines and anything else are skipped
//!
//! # Module structure
//! - `events` - Line type, event tags and the per-frame parse error
//! - `payloads` - Internal payload deserialization structs
//! - `parser` - Line and payload parsing functions
//! - `reader` - `FrameReader`, byte stream to lines
//! - `dispatcher` - `EventDispatcher`, lines to sink mutations

mod dispatcher;
mod events;
mod parser;
mod payloads;
mod reader;

// Re-export public types
pub use dispatcher::{DispatchOutcome, EventDispatcher};
pub use events::{
    SseLine, SseParseError, StreamEventKind, ANSWER_DELTA_GENERATED, KNOWLEDGE_RETRIEVED,
};
pub use parser::{parse_delta, parse_sources, parse_sse_line};
pub use reader::FrameReader;
