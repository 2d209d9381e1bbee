//! Client configuration
//!
//! `ClientConfig` holds everything needed to build a [`JwstClient`]:
//! the API key, the base URL and the transport policy (timeout, user agent,
//! optional rate limit). It can be built in code, loaded from a YAML file, or
//! read from the environment.
//!
//! ```yaml
//! api_key: "abc123"
//! base_url: "https://api.jwstapi.com"
//! timeout_ms: 60000
//! rate_limit:
//!   requests_per_second: 2
//!   burst_size: 4
//! ```
//!
//! [`JwstClient`]: crate::client::JwstClient

use crate::error::{Error, Result};
use crate::http::RateLimiterConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.jwstapi.com";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "JWST_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "JWST_API_BASE_URL";

/// Configuration for a [`JwstClient`](crate::client::JwstClient)
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Key sent in the `X-API-KEY` header
    pub api_key: String,

    /// Base URL for all requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Client-side rate limit (disabled when absent)
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_user_agent() -> String {
    format!("jwstapi/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a config with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            rate_limit: None,
        }
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout, rounded up to whole milliseconds
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        let partial = u128::from(timeout.subsec_nanos() % 1_000_000 != 0);
        self.timeout_ms = u64::try_from(timeout.as_millis() + partial).unwrap_or(u64::MAX);
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Enable client-side rate limiting
    #[must_use]
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.rate_limit = Some(config);
        self
    }

    /// Request timeout as a `Duration`
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Parse a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Build a config from `JWST_API_KEY` (and optionally `JWST_API_BASE_URL`).
    ///
    /// An unset or empty `JWST_API_KEY` is reported as a missing field.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::missing_field(API_KEY_ENV))?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Check the config for values the client cannot work with.
    ///
    /// The key is not checked at all, not even for emptiness; a bad key
    /// surfaces as a failure envelope from the API.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        if self.timeout_ms == 0 {
            return Err(Error::config("timeout_ms must be greater than 0"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("user_agent", &self.user_agent)
            .field("rate_limit", &self.rate_limit)
            .finish()
    }
}
