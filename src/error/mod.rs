//! Error handling for the answer client.
//!
//! - **Error Categories**: High-level classification for handling decisions
//! - **Domain-specific Errors**: Configuration and Network errors
//! - **Unified Error Type**: `FindrError` consolidates both
//! - **Error Context**: Operation and conversation attached to errors
//! - **Result Type Alias**: `FindrResult<T>` for consistent return types
//!
//! | Category | Description |
//! |----------|-------------|
//! | Network | Connection, DNS, timeout, dropped stream |
//! | Auth | Credentials rejected (401/403) |
//! | Server | 5xx, protocol violations |
//! | Client | Other 4xx, bad URL |
//! | Configuration | Missing env vars, no project |
//!
//! Malformed SSE payloads and a final answer that is not JSON are never
//! errors at this level; the stream pipeline recovers from both.

mod category;
mod config;
mod context;
mod findr_error;
mod network;
mod result;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use context::ErrorContext;
pub use findr_error::FindrError;
pub use network::{classify_http_error, NetworkError};
pub use result::{FindrResult, ResultExt};
