//! Common types used throughout the client
//!
//! This module contains shared type definitions, type aliases,
//! and the result type every endpoint returns.

use crate::error::Result;
use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// A single data record returned by a paginated endpoint.
///
/// The schema belongs to the remote API, so records are kept as raw JSON.
pub type Record = JsonValue;

// ============================================================================
// API Response
// ============================================================================

/// Outcome of a call that reached the API and got a well-formed envelope.
///
/// The API wraps every answer as `{"body": ...}` (HTTP 200) or
/// `{"error": ...}` (any other status). `Data` carries the unwrapped body,
/// `Failure` carries the raw error payload exactly as the API sent it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    /// Successful response payload
    Data(T),
    /// Error payload from the `error` field of the envelope
    Failure(JsonValue),
}

impl<T> ApiResponse<T> {
    /// Check if this is a data response
    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }

    /// Check if this is a failure response
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the data, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the error payload, if any
    pub fn failure(&self) -> Option<&JsonValue> {
        match self {
            Self::Data(_) => None,
            Self::Failure(payload) => Some(payload),
        }
    }

    /// Take the data, dropping a failure payload
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Take the error payload, dropping data
    pub fn into_failure(self) -> Option<JsonValue> {
        match self {
            Self::Data(_) => None,
            Self::Failure(payload) => Some(payload),
        }
    }

    /// Convert into a standard `Result` with the payload as the error
    pub fn into_result(self) -> std::result::Result<T, JsonValue> {
        match self {
            Self::Data(data) => Ok(data),
            Self::Failure(payload) => Err(payload),
        }
    }

    /// Map the data with a fallible function
    pub fn try_map<U, F: FnOnce(T) -> Result<U>>(self, f: F) -> Result<ApiResponse<U>> {
        match self {
            Self::Data(data) => f(data).map(ApiResponse::Data),
            Self::Failure(payload) => Ok(ApiResponse::Failure(payload)),
        }
    }
}

// ============================================================================
// Projected Records
// ============================================================================

/// A file suffix known to the API, as listed by `/suffix/list`.
///
/// Only these three fields are kept; anything else in the source record is
/// dropped. All three must be present, but `instruments` and `description`
/// are passed through as whatever JSON the API sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixInfo {
    /// File suffix (e.g. `i2d`)
    pub suffix: String,
    /// Instruments producing files with this suffix
    pub instruments: JsonValue,
    /// Human-readable description
    pub description: JsonValue,
}

/// Row shape of `/program/list`; only the identifier is kept.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProgramEntry {
    #[serde(deserialize_with = "program_id")]
    pub program: String,
}

/// Program ids are strings, but numeric ids are accepted as their decimal text.
fn program_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
