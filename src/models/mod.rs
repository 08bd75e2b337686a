//! Data types exchanged with the agent service and returned to callers.

mod answer;
mod request;
mod session;
mod source;

pub use answer::StructuredResult;
pub use request::{AskRequest, ConversationResponse};
pub use session::ConversationSession;
pub use source::RetrievedSource;
