//! Network-related error types.
//!
//! Everything that can go wrong talking to the agent service: connection
//! setup, HTTP statuses, the overall deadline, a stream dropped mid-way,
//! and responses that violate the protocol.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// DNS resolution failed.
    DnsResolutionFailed { host: String },

    /// The overall request deadline elapsed.
    Timeout {
        operation: String,
        duration_secs: u64,
    },

    /// TLS/SSL error.
    TlsError { message: String },

    /// HTTP status error (non-2xx response).
    HttpStatus { status: u16, message: String },

    /// Rate limited by server.
    RateLimited,

    /// The response body did not follow the protocol
    /// (for example, no `conversationId`).
    InvalidResponse { message: String },

    /// The event stream failed after it had started.
    StreamInterrupted { message: String },

    /// The request URL could not be built.
    InvalidUrl { url: String },

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to connect to the agent service. Please check your internet connection."
                    .to_string()
            }
            NetworkError::DnsResolutionFailed { host } => {
                format!("Could not resolve server address '{}'.", host)
            }
            NetworkError::Timeout {
                operation,
                duration_secs,
            } => {
                format!(
                    "The {} operation timed out after {} seconds. The agent may be slow or unreachable.",
                    operation, duration_secs
                )
            }
            NetworkError::TlsError { .. } => {
                "A secure connection could not be established.".to_string()
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                400 => "The request was invalid.".to_string(),
                401 => "The API key was rejected.".to_string(),
                403 => "Access denied for this organization or project.".to_string(),
                404 => "The project was not found.".to_string(),
                500..=599 => {
                    "The agent service is experiencing issues. Please try again later.".to_string()
                }
                _ => format!("The agent service returned an error (HTTP {}).", status),
            },
            NetworkError::RateLimited => {
                "Too many requests. Please wait a moment and try again.".to_string()
            }
            NetworkError::InvalidResponse { .. } => {
                "Received an invalid response from the agent service.".to_string()
            }
            NetworkError::StreamInterrupted { .. } => {
                "The answer stream was interrupted before it finished.".to_string()
            }
            NetworkError::InvalidUrl { url } => format!("Invalid request URL '{}'.", url),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::DnsResolutionFailed { .. } => "E_NET_DNS",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::TlsError { .. } => "E_NET_TLS",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::RateLimited => "E_NET_RATE",
            NetworkError::InvalidResponse { .. } => "E_NET_PROTOCOL",
            NetworkError::StreamInterrupted { .. } => "E_NET_STREAM",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::DnsResolutionFailed { host } => {
                write!(f, "DNS resolution failed for '{}'", host)
            }
            NetworkError::Timeout {
                operation,
                duration_secs,
            } => {
                write!(f, "{} timed out after {} seconds", operation, duration_secs)
            }
            NetworkError::TlsError { message } => write!(f, "TLS error: {}", message),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::RateLimited => write!(f, "Rate limited"),
            NetworkError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            NetworkError::StreamInterrupted { message } => {
                write!(f, "Stream interrupted: {}", message)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL: {}", url),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a transport-level HTTP error into a NetworkError.
pub fn classify_http_error(err: &HttpError, url: &str) -> NetworkError {
    match err {
        HttpError::ConnectionFailed(message) => {
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                NetworkError::DnsResolutionFailed {
                    host: extract_host_from_url(url),
                }
            } else if lower.contains("tls") || lower.contains("certificate") {
                NetworkError::TlsError {
                    message: message.clone(),
                }
            } else {
                NetworkError::ConnectionFailed {
                    url: url.to_string(),
                    message: message.clone(),
                }
            }
        }
        HttpError::Timeout(message) => NetworkError::StreamInterrupted {
            message: format!("read timed out: {}", message),
        },
        HttpError::ServerError { status: 429, .. } => NetworkError::RateLimited,
        HttpError::ServerError { status, message } => NetworkError::HttpStatus {
            status: *status,
            message: message.clone(),
        },
        HttpError::Io(message) => NetworkError::StreamInterrupted {
            message: message.clone(),
        },
        HttpError::InvalidUrl(_) => NetworkError::InvalidUrl {
            url: url.to_string(),
        },
        HttpError::Other(message) => NetworkError::Other {
            message: message.clone(),
        },
    }
}

/// Extract the host portion from a URL string.
fn extract_host_from_url(url: &str) -> String {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    without_scheme
        .split(&['/', ':'][..])
        .next()
        .unwrap_or(url)
        .to_string()
}
