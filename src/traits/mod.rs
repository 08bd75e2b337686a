//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (POST, streaming POST)
//! - [`ResponseSink`] - Receiver of decoded answer stream mutations

pub mod http;
pub mod sse;

pub use http::{ByteStream, Headers, HttpClient, HttpError, Response};
pub use sse::ResponseSink;
