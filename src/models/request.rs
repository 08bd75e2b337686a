use serde::{Deserialize, Serialize};

/// Body of `POST {base}/ask`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AskRequest {
    #[serde(rename = "conversationId")]
    pub conversation_id: String,
    pub query: String,
    pub stream: bool,
}

impl AskRequest {
    /// Create a streaming request for a conversation
    pub fn new(conversation_id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            query: query.into(),
            stream: true,
        }
    }
}

/// Response of `POST {base}/conversations`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ConversationResponse {
    #[serde(rename = "conversationId", default)]
    pub conversation_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_request_serializes_wire_names() {
        let request = AskRequest::new("conv-1", "¿Qué es el SCTR?");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "conversationId": "conv-1",
                "query": "¿Qué es el SCTR?",
                "stream": true
            })
        );
    }

    #[test]
    fn test_conversation_response_with_id() {
        let resp: ConversationResponse =
            serde_json::from_str(r#"{"conversationId":"abc","createdAt":"now"}"#).unwrap();
        assert_eq!(resp.conversation_id, Some("abc".to_string()));
    }

    #[test]
    fn test_conversation_response_without_id() {
        let resp: ConversationResponse = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
        assert_eq!(resp.conversation_id, None);
    }
}
