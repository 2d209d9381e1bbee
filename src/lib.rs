//! # jwstapi
//!
//! Async client for the James Webb Space Telescope data API
//! (`https://api.jwstapi.com`).
//!
//! ## Features
//!
//! - **Program and Suffix Listings**: Enumerate programs and file suffixes
//! - **Paginated Data Retrieval**: By program, suffix, file type, or observation
//! - **Explicit Results**: API error payloads and transport failures are kept apart
//! - **Configurable Transport**: Timeout and optional client-side rate limiting
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jwstapi::{ApiResponse, JwstClient, PageOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = JwstClient::new("your-api-key")?;
//!
//!     // Pages 1 and 2 (the last page is excluded), 25 records each
//!     let options = PageOptions::new().first_page(1).last_page(3).per_page(25);
//!
//!     match client.program_data("2731", options).await? {
//!         ApiResponse::Data(records) => println!("{} records", records.len()),
//!         ApiResponse::Failure(payload) => eprintln!("API error: {payload}"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       JwstClient                         │
//! │  version()  programs_list()  suffixes_list()             │
//! │  program_data()  data_by_suffix()  files_by_type()       │
//! │  data_by_observation()                                   │
//! └──────────────────────────────────────────────────────────┘
//!                 │                        │
//!       ┌─────────┴────────┐    ┌──────────┴──────────┐
//!       │    Pagination    │───▶│        HTTP         │
//!       │  collect_pages   │    │  pooled client,     │
//!       │  bounded / until │    │  envelope unwrap,   │
//!       │  empty page      │    │  rate limit         │
//!       └──────────────────┘    └─────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport and envelope handling
pub mod http;

/// Page-number pagination
pub mod pagination;

/// JWST API client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::JwstClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::PageOptions;
pub use types::{ApiResponse, JsonValue, Record, SuffixInfo};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
