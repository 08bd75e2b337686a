//! Error category classification.
//!
//! Categories drive the hint the CLI prints next to a failure.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (connection, DNS, timeout, dropped stream).
    Network,

    /// The service rejected the credentials (HTTP 401/403).
    Auth,

    /// Service-side errors (HTTP 5xx, malformed protocol responses).
    Server,

    /// Client-side errors (rejected requests, invalid URLs).
    Client,

    /// Missing or invalid configuration, detected before any I/O.
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again",
            ErrorCategory::Auth => "Check AIFINDR_ORG_ID and AIFINDR_API_KEY",
            ErrorCategory::Server => {
                "The service may be experiencing issues. Please try again later"
            }
            ErrorCategory::Client => "Check the project ID and API URL",
            ErrorCategory::Configuration => "Set the required environment variables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
