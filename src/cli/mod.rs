//! CLI module
//!
//! Command-line interface over [`JwstClient`](crate::client::JwstClient).
//!
//! # Commands
//!
//! - `version` - Show API version information
//! - `programs` - List program identifiers
//! - `suffixes` - List file suffixes
//! - `program` - Fetch records of a program
//! - `suffix` - Fetch records with a file suffix
//! - `file-type` - Fetch files of a type
//! - `observation` - Fetch records of an observation

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PageArgs};
pub use runner::Runner;
