//! aifindr - streaming answer client for AIFindr widget agents
//!
//! This library exposes modules for use in integration tests and by the CLI.

pub mod accumulator;
pub mod adapters;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod sse;
pub mod traits;

pub use accumulator::ResponseAccumulator;
pub use client::AifindrClient;
pub use config::ClientConfig;
pub use error::{FindrError, FindrResult};
pub use models::{ConversationSession, RetrievedSource, StructuredResult};
