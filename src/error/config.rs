//! Configuration errors.
//!
//! Raised while building a client configuration, before any network call.

use thiserror::Error;

/// Errors raised while loading the client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("Environment variable {name} must be set.")]
    MissingVariable { name: String },

    /// An environment variable is set to something unusable.
    #[error("Environment variable {name} has an invalid value: {message}")]
    InvalidVariable { name: String, message: String },

    /// No project was given.
    #[error("A project ID is required")]
    MissingProject,
}

impl ConfigError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::MissingVariable { name } => {
                format!("{} is not set. Export it before running a query.", name)
            }
            ConfigError::InvalidVariable { name, message } => {
                format!("{} is invalid: {}", name, message)
            }
            ConfigError::MissingProject => {
                "A project ID is required (use --project prj_xxx).".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::MissingVariable { .. } => "E_CFG_MISSING",
            ConfigError::InvalidVariable { .. } => "E_CFG_INVALID",
            ConfigError::MissingProject => "E_CFG_PROJECT",
        }
    }
}
