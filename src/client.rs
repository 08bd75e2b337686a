//! AIFindr widget API client.
//!
//! Opens conversations and streams answers from the agent, driving the
//! frame reader, dispatcher and accumulator to completion. Every public
//! operation runs under one overall deadline covering connection setup
//! and the whole stream drain.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use futures_util::StreamExt;
use tracing::{debug, info, warn};

use crate::accumulator::ResponseAccumulator;
use crate::adapters::ReqwestHttpClient;
use crate::config::ClientConfig;
use crate::error::{classify_http_error, ErrorContext, FindrResult, NetworkError, ResultExt};
use crate::models::{AskRequest, ConversationResponse, ConversationSession, StructuredResult};
use crate::sse::{DispatchOutcome, EventDispatcher, FrameReader};
use crate::traits::{Headers, HttpClient};

/// Client for the widget conversation API of one project.
///
/// Cheap to clone; clones share the underlying HTTP connection pool but no
/// per-query state, so queries can run concurrently.
#[derive(Clone)]
pub struct AifindrClient {
    config: ClientConfig,
    http: Arc<dyn HttpClient>,
}

impl AifindrClient {
    /// Create a client backed by reqwest.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, ReqwestHttpClient::new())
    }

    /// Create a client with a custom HTTP implementation.
    pub fn with_http_client(config: ClientConfig, http: impl HttpClient + 'static) -> Self {
        Self {
            config,
            http: Arc::new(http),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Open a new conversation.
    ///
    /// Sends `POST {base}/conversations` with an empty JSON body. A non-2xx
    /// status is a transport error; a body without `conversationId` is a
    /// protocol error.
    pub async fn open_session(&self) -> FindrResult<ConversationSession> {
        self.with_deadline("open_session", self.open_session_inner()).await
    }

    /// Ask a question within an open conversation and wait for the full answer.
    ///
    /// The event stream is read until the server closes it. If the deadline
    /// elapses first the stream is dropped and nothing partial is returned.
    pub async fn ask(
        &self,
        session: &ConversationSession,
        query: &str,
    ) -> FindrResult<StructuredResult> {
        self.with_deadline("ask", self.ask_inner(session, query)).await
    }

    /// Open a conversation and ask one question, under a single deadline.
    pub async fn fetch(&self, query: &str) -> FindrResult<StructuredResult> {
        self.with_deadline("fetch", async {
            let session = self.open_session_inner().await?;
            self.ask_inner(&session, query).await
        })
        .await
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("X-Organization-Id".to_string(), self.config.org_id.clone());
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.config.api_key),
        );
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    async fn with_deadline<T, F>(&self, operation: &str, fut: F) -> FindrResult<T>
    where
        F: Future<Output = FindrResult<T>>,
    {
        let limit = self.config.request_timeout;
        match tokio::time::timeout(limit, fut).await {
            Ok(result) => result,
            Err(_) => {
                warn!("{} exceeded the {:?} deadline", operation, limit);
                Err(NetworkError::Timeout {
                    operation: operation.to_string(),
                    duration_secs: limit.as_secs(),
                }
                .into())
            }
        }
    }

    async fn open_session_inner(&self) -> FindrResult<ConversationSession> {
        let url = format!("{}/conversations", self.config.base_url());
        let ctx = || ErrorContext::new("open_session").with_component("client");
        debug!("Opening conversation at {}", url);

        let response = self
            .http
            .post(&url, "{}", &self.headers())
            .await
            .map_err(|e| classify_http_error(&e, &url))
            .with_context(ctx)?;

        if !response.is_success() {
            let err = match response.status {
                429 => NetworkError::RateLimited,
                status => NetworkError::HttpStatus {
                    status,
                    message: response.text().unwrap_or_default(),
                },
            };
            return Err(err).with_context(ctx);
        }

        let body: ConversationResponse = response
            .json()
            .map_err(|e| NetworkError::InvalidResponse {
                message: format!("conversation response is not valid: {}", e),
            })
            .with_context(ctx)?;

        let id = body
            .conversation_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| NetworkError::InvalidResponse {
                message: "conversation response has no conversationId".to_string(),
            })
            .with_context(ctx)?;

        info!("Opened conversation {}", id);
        Ok(ConversationSession::new(id))
    }

    async fn ask_inner(
        &self,
        session: &ConversationSession,
        query: &str,
    ) -> FindrResult<StructuredResult> {
        let url = format!("{}/ask", self.config.base_url());
        let ctx = || {
            ErrorContext::new("ask")
                .with_component("client")
                .with_conversation_id(&session.id)
        };

        let body = serde_json::to_string(&AskRequest::new(&session.id, query))
            .map_err(|e| NetworkError::Other {
                message: format!("failed to encode ask request: {}", e),
            })
            .with_context(ctx)?;

        let mut headers = self.headers();
        headers.insert("Accept".to_string(), "text/event-stream".to_string());

        let started = Instant::now();
        let bytes = self
            .http
            .post_stream(&url, &body, &headers)
            .await
            .map_err(|e| classify_http_error(&e, &url))
            .with_context(ctx)?;

        let mut reader = FrameReader::new(bytes);
        let mut dispatcher = EventDispatcher::new();
        let mut accumulator = ResponseAccumulator::new();
        let mut skipped = 0usize;

        while let Some(line) = reader.next().await {
            let line = line
                .map_err(|e| classify_http_error(&e, &url))
                .with_context(ctx)?;
            if let DispatchOutcome::Skipped(_) = dispatcher.dispatch(line, &mut accumulator) {
                skipped += 1;
            }
        }

        let result = accumulator.finalize(started.elapsed());
        info!(
            "Answer for conversation {} complete: {} chars, {} sources, {} skipped frames, {:.2}s",
            session.id,
            result.text_response.chars().count(),
            result.sources.len(),
            skipped,
            result.latency_seconds
        );
        Ok(result)
    }
}

impl std::fmt::Debug for AifindrClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AifindrClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
