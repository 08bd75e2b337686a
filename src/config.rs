//! Client configuration.
//!
//! Credentials come from the environment; everything else has defaults
//! that can be overridden with the builder methods.

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Default API root of the AIFindr SaaS.
pub const DEFAULT_API_ROOT: &str = "https://api.saas.aifindr.ai";

/// Ceiling for one whole exchange: connect plus full stream drain.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub const ENV_ORG_ID: &str = "AIFINDR_ORG_ID";
pub const ENV_API_KEY: &str = "AIFINDR_API_KEY";
pub const ENV_API_URL: &str = "AIFINDR_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "AIFINDR_TIMEOUT_SECS";

/// Configuration for [`crate::client::AifindrClient`].
///
/// # Example
///
/// ```ignore
/// use aifindr::config::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("org_1", "key_1", "prj_1")
///     .with_api_root("http://localhost:8080")
///     .with_request_timeout(Duration::from_secs(30));
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// Sent as `X-Organization-Id`
    pub org_id: String,
    /// Sent as `Authorization: Bearer <key>`
    pub api_key: String,
    /// Widget project the agent belongs to
    pub project_id: String,
    /// Scheme and host of the API, without a trailing path
    pub api_root: String,
    /// Deadline for each client operation
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Create a config with explicit credentials and default settings.
    pub fn new(
        org_id: impl Into<String>,
        api_key: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        Self {
            org_id: org_id.into(),
            api_key: api_key.into(),
            project_id: project_id.into(),
            api_root: DEFAULT_API_ROOT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Override the API root (scheme and host).
    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    /// Override the per-operation deadline.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Load credentials and overrides from the process environment.
    ///
    /// Fails before any network call if a credential is missing or empty.
    pub fn from_env(project_id: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(project_id, |name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(project_id: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if project_id.trim().is_empty() {
            return Err(ConfigError::MissingProject);
        }

        let required = |name: &str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::MissingVariable {
                    name: name.to_string(),
                })
        };

        let org_id = required(ENV_ORG_ID)?;
        let api_key = required(ENV_API_KEY)?;
        let mut config = Self::new(org_id, api_key, project_id);

        if let Some(api_root) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
            config = config.with_api_root(api_root);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidVariable {
                    name: ENV_TIMEOUT_SECS.to_string(),
                    message: e.to_string(),
                }
            })?;
            if secs == 0 {
                return Err(ConfigError::InvalidVariable {
                    name: ENV_TIMEOUT_SECS.to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
            config = config.with_request_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// `{api_root}/api/widget/projects/{project_id}`
    pub fn base_url(&self) -> String {
        format!(
            "{}/api/widget/projects/{}",
            self.api_root.trim_end_matches('/'),
            self.project_id
        )
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("org_id", &self.org_id)
            .field("api_key", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("api_root", &self.api_root)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
