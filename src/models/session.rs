use serde::{Deserialize, Serialize};

/// A conversation opened on the agent service.
///
/// One is created per query and owned by the client for that query only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSession {
    pub id: String,
}

impl ConversationSession {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
