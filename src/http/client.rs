//! HTTP client with envelope unwrapping
//!
//! Provides the transport used by every endpoint:
//! - One pooled `reqwest::Client` reused for all requests
//! - Fixed default headers (API key, content type)
//! - Optional client-side rate limiting
//! - Unwrapping of the `{"body"}` / `{"error"}` response envelope
//!
//! No retries are performed here. Timeouts are the only transport policy and
//! are configured through [`HttpClientConfig`].

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::error::{Error, Result};
use crate::types::{ApiResponse, JsonValue};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Header carrying the API key
pub(crate) const API_KEY_HEADER: &str = "X-API-KEY";

/// Configuration for the HTTP client
#[derive(Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            rate_limit: None,
            default_headers: HashMap::new(),
            user_agent: format!("jwstapi/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

impl std::fmt::Debug for HttpClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<&str> = self.default_headers.keys().map(String::as_str).collect();
        f.debug_struct("HttpClientConfig")
            .field("timeout", &self.timeout)
            .field("rate_limit", &self.rate_limit)
            .field("default_headers", &headers)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the API key and JSON content type headers
    pub fn api_key(self, key: impl Into<String>) -> Self {
        self.header(API_KEY_HEADER, key)
            .header("Content-Type", "application/json")
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client bound to a fixed header set
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(build_header_map(&config.default_headers)?)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Make a GET request with query parameters
    pub async fn get<Q>(&self, url: &Url, query: &Q) -> Result<Response>
    where
        Q: Serialize + ?Sized,
    {
        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        let response = self.client.get(url.clone()).query(query).send().await?;
        debug!("GET {} -> {}", url, response.status().as_u16());
        Ok(response)
    }

    /// Make a GET request and unwrap the response envelope
    pub async fn get_envelope<Q>(&self, url: &Url, query: &Q) -> Result<ApiResponse<JsonValue>>
    where
        Q: Serialize + ?Sized,
    {
        let response = self.get(url, query).await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let unwrapped = unwrap_envelope(status, &bytes)?;
        if let ApiResponse::Failure(ref payload) = unwrapped {
            warn!("API returned {} for {}: {}", status.as_u16(), url, payload);
        }
        Ok(unwrapped)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Unwrap a response envelope.
///
/// HTTP 200 must carry `{"body": ...}`; every other status must carry
/// `{"error": ...}`. Status codes are not otherwise distinguished.
pub fn unwrap_envelope(status: StatusCode, bytes: &[u8]) -> Result<ApiResponse<JsonValue>> {
    let code = status.as_u16();
    let json: JsonValue = serde_json::from_slice(bytes)
        .map_err(|e| Error::unexpected_response(code, format!("body is not JSON: {e}")))?;

    let JsonValue::Object(mut envelope) = json else {
        return Err(Error::unexpected_response(
            code,
            "envelope is not a JSON object",
        ));
    };

    if status == StatusCode::OK {
        envelope
            .remove("body")
            .map(ApiResponse::Data)
            .ok_or_else(|| Error::unexpected_response(code, "missing 'body' key"))
    } else {
        envelope
            .remove("error")
            .map(ApiResponse::Failure)
            .ok_or_else(|| Error::unexpected_response(code, "missing 'error' key"))
    }
}

/// Convert the configured headers into a reqwest header map
fn build_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| Error::config(format!("Invalid header name '{key}': {e}")))?;
        let mut value = HeaderValue::from_str(value)
            .map_err(|e| Error::config(format!("Invalid value for header '{key}': {e}")))?;
        if key.eq_ignore_ascii_case(API_KEY_HEADER) {
            value.set_sensitive(true);
        }
        map.insert(name, value);
    }
    Ok(map)
}
