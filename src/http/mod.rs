//! HTTP client module
//!
//! Provides the transport layer shared by every endpoint.
//!
//! # Features
//!
//! - **Pooled Connections**: One `reqwest::Client` for the lifetime of the API client
//! - **Fixed Headers**: API key and content type on every request
//! - **Envelope Unwrap**: `{"body"}` / `{"error"}` responses mapped to [`ApiResponse`](crate::types::ApiResponse)
//! - **Rate Limiting**: Optional token bucket rate limiter using governor

mod client;
mod rate_limit;

pub use client::{unwrap_envelope, HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
