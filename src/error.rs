//! Error types for the JWST API client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Note that a failure *envelope* returned by the remote service
//! (`{"error": ...}` on a non-200 status) is not an `Error`: it is surfaced as
//! [`ApiResponse::Failure`](crate::types::ApiResponse::Failure). `Error` covers
//! everything that prevented the client from getting a well-formed answer.

use thiserror::Error;

/// The main error type for the JWST API client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid page options: {message}")]
    InvalidPageOptions { message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Base URL cannot carry path segments: {url}")]
    InvalidBaseUrl { url: String },

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error("Unexpected response shape (HTTP {status}): {message}")]
    UnexpectedResponse { status: u16, message: String },

    #[error("Failed to map {what} from response body: {source}")]
    Projection {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid page options error
    pub fn page_options(message: impl Into<String>) -> Self {
        Self::InvalidPageOptions {
            message: message.into(),
        }
    }

    /// Create an unexpected response error
    pub fn unexpected_response(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            status,
            message: message.into(),
        }
    }

    /// Create a projection error
    pub fn projection(what: &'static str, source: serde_json::Error) -> Self {
        Self::Projection { what, source }
    }

    /// Check if this error was raised by the transport rather than the API
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Check if this error came from a response the client could not interpret
    pub fn is_response_shape(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedResponse { .. } | Error::Projection { .. }
        )
    }
}

/// Result type alias for the JWST API client
pub type Result<T> = std::result::Result<T, Error>;
