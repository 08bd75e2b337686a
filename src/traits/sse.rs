//! Sink abstraction for decoded SSE payloads.
//!
//! The event dispatcher only ever talks to a [`ResponseSink`], which keeps
//! it independent of how answers are accumulated and lets tests observe
//! exactly which mutations a stream produced.

use crate::models::RetrievedSource;

/// Receiver of the two mutations an answer stream can cause.
///
/// # Example
///
/// ```ignore
/// use aifindr::traits::ResponseSink;
///
/// struct Printer;
///
/// impl ResponseSink for Printer {
///     fn append_delta(&mut self, delta: &str) {
///         print!("{}", delta);
///     }
///
///     fn replace_sources(&mut self, _sources: Vec<RetrievedSource>) {}
/// }
/// ```
pub trait ResponseSink: Send {
    /// Append one answer fragment, in arrival order.
    fn append_delta(&mut self, delta: &str);

    /// Replace the retrieved sources wholesale.
    fn replace_sources(&mut self, sources: Vec<RetrievedSource>);
}
