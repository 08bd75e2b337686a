//! Common test utilities for integration tests.
//!
//! Fixtures for standing up a fake widget API with wiremock and pointing
//! a client at it.
//!
//! # Example
//!
//! ```ignore
//! let server = MockServer::start().await;
//! mount_conversation(&server, "conv-1").await;
//! let client = client_for(&server);
//! ```

#![allow(dead_code)]

use std::time::Duration;

use aifindr::{AifindrClient, ClientConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ORG_ID: &str = "org_test";
pub const API_KEY: &str = "key_test";
pub const PROJECT_ID: &str = "prj_test";

pub const DELTA: &str = "search-workflow-answer-delta-generated";
pub const RETRIEVED: &str = "search-workflow-knowledge-retrieved";

pub fn conversations_path() -> String {
    format!("/api/widget/projects/{}/conversations", PROJECT_ID)
}

pub fn ask_path() -> String {
    format!("/api/widget/projects/{}/ask", PROJECT_ID)
}

/// Config aimed at the mock server.
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(ORG_ID, API_KEY, PROJECT_ID).with_api_root(server.uri())
}

pub fn client_for(server: &MockServer) -> AifindrClient {
    AifindrClient::new(config_for(server))
}

pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> AifindrClient {
    AifindrClient::new(config_for(server).with_request_timeout(timeout))
}

/// Encode `(event, data)` pairs as an SSE body, one blank line per frame.
pub fn sse_body(frames: &[(&str, &str)]) -> String {
    frames
        .iter()
        .map(|(event, data)| format!("event: {}\ndata: {}\n\n", event, data))
        .collect()
}

/// Delta frame data for a text fragment.
pub fn delta(text: &str) -> String {
    serde_json::json!({ "delta": text }).to_string()
}

pub fn sse_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/event-stream")
}

pub async fn mount_conversation(server: &MockServer, id: &str) {
    Mock::given(method("POST"))
        .and(path(conversations_path()))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({ "conversationId": id })),
        )
        .mount(server)
        .await;
}

pub async fn mount_ask(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(ask_path()))
        .respond_with(response)
        .mount(server)
        .await;
}
