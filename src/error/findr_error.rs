//! Unified error type for the answer client.
//!
//! Only configuration and transport failures ever reach a caller; malformed
//! frames and an unparseable final answer are recovered inside the stream
//! pipeline.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::context::ErrorContext;
use super::network::NetworkError;

/// Unified error type for the answer client.
#[derive(Debug)]
pub enum FindrError {
    /// Missing or invalid configuration, raised before any I/O.
    Config(ConfigError),

    /// Transport and protocol errors (connections, HTTP, timeouts).
    Network(NetworkError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<FindrError>,
        context: ErrorContext,
    },
}

impl FindrError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FindrError::Config(_) => ErrorCategory::Configuration,
            FindrError::Network(err) => match err {
                NetworkError::HttpStatus { status, .. } => match *status {
                    401 | 403 => ErrorCategory::Auth,
                    500..=599 => ErrorCategory::Server,
                    _ => ErrorCategory::Client,
                },
                NetworkError::InvalidResponse { .. } => ErrorCategory::Server,
                NetworkError::InvalidUrl { .. } => ErrorCategory::Client,
                _ => ErrorCategory::Network,
            },
            FindrError::WithContext { error, .. } => error.category(),
        }
    }

    /// Get a user-friendly error message.
    ///
    /// Attached context is left out; it goes to the log instead.
    pub fn user_message(&self) -> String {
        match self {
            FindrError::Config(err) => err.user_message(),
            FindrError::Network(err) => err.user_message(),
            FindrError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FindrError::Config(err) => err.error_code(),
            FindrError::Network(err) => err.error_code(),
            FindrError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        FindrError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            FindrError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &FindrError {
        match self {
            FindrError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    /// Whether the overall request deadline elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self.inner(), FindrError::Network(NetworkError::Timeout { .. }))
    }
}

impl fmt::Display for FindrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindrError::Config(err) => write!(f, "{}", err),
            FindrError::Network(err) => write!(f, "{}", err),
            FindrError::WithContext { error, context } => {
                write!(f, "{} ({})", error, context)
            }
        }
    }
}

impl std::error::Error for FindrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FindrError::Config(err) => Some(err),
            FindrError::Network(err) => Some(err),
            FindrError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<ConfigError> for FindrError {
    fn from(err: ConfigError) -> Self {
        FindrError::Config(err)
    }
}

impl From<NetworkError> for FindrError {
    fn from(err: NetworkError) -> Self {
        FindrError::Network(err)
    }
}
