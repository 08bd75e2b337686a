//! Event dispatcher: routes data lines by the current event type.
//!
//! The current event type is sticky. It is set by an `event:` line and
//! stays in force for every following `data:` line until the next
//! `event:` line replaces it; blank lines do not reset it.

use tracing::debug;

use crate::sse::events::{SseLine, SseParseError, StreamEventKind};
use crate::sse::parser::{parse_delta, parse_sources};
use crate::traits::ResponseSink;

/// What a single line did to the sink.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// An `event:` line changed the current event type
    EventTypeSet,
    /// Sources were replaced with a list of this length
    SourcesReplaced(usize),
    /// A delta of this many bytes was appended
    DeltaAppended(usize),
    /// The payload was malformed and dropped
    Skipped(SseParseError),
    /// No event type, or one this stream does not use
    Ignored,
}

/// Stateful dispatcher for one query's stream.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    current_event_type: Option<String>,
}

impl EventDispatcher {
    /// Create a dispatcher with no current event type.
    pub fn new() -> Self {
        Self::default()
    }

    /// The event type data lines are currently attributed to.
    pub fn current_event_type(&self) -> Option<&str> {
        self.current_event_type.as_deref()
    }

    /// Apply one line to the sink. Never fails.
    pub fn dispatch<S: ResponseSink + ?Sized>(
        &mut self,
        line: SseLine,
        sink: &mut S,
    ) -> DispatchOutcome {
        match line {
            SseLine::Event(event_type) => {
                self.current_event_type = Some(event_type);
                DispatchOutcome::EventTypeSet
            }
            SseLine::Data(data) => self.dispatch_data(&data, sink),
            SseLine::Empty | SseLine::Comment(_) => DispatchOutcome::Ignored,
        }
    }

    fn dispatch_data<S: ResponseSink + ?Sized>(&self, data: &str, sink: &mut S) -> DispatchOutcome {
        let Some(event_type) = self.current_event_type.as_deref() else {
            return DispatchOutcome::Ignored;
        };

        let outcome = match StreamEventKind::from_tag(event_type) {
            Some(StreamEventKind::KnowledgeRetrieved) => {
                parse_sources(event_type, data).map(|sources| {
                    let count = sources.len();
                    sink.replace_sources(sources);
                    DispatchOutcome::SourcesReplaced(count)
                })
            }
            Some(StreamEventKind::AnswerDelta) => parse_delta(event_type, data).map(|delta| {
                sink.append_delta(&delta);
                DispatchOutcome::DeltaAppended(delta.len())
            }),
            None => Ok(DispatchOutcome::Ignored),
        };

        outcome.unwrap_or_else(|err| {
            debug!("Skipping malformed SSE payload: {}", err);
            DispatchOutcome::Skipped(err)
        })
    }
}
