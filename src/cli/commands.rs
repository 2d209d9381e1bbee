//! CLI commands and argument parsing

use crate::config::{API_KEY_ENV, BASE_URL_ENV};
use crate::pagination::PageOptions;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for the JWST data API
#[derive(Parser, Debug)]
#[command(name = "jwstapi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key (sent as X-API-KEY)
    #[arg(short = 'k', long, global = true, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show API version information
    Version,

    /// List program identifiers
    Programs,

    /// List file suffixes with their instruments
    Suffixes,

    /// Fetch records of a program
    Program {
        /// Program identifier (e.g. 2731)
        program_id: String,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// Fetch records with a file suffix
    Suffix {
        /// File suffix (e.g. _cal)
        suffix: String,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// Fetch files of a type
    FileType {
        /// File type (e.g. fits, jpg)
        file_type: String,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// Fetch records of an observation
    Observation {
        /// Observation identifier
        observation: String,

        #[command(flatten)]
        pages: PageArgs,
    },
}

/// Page selection shared by the paginated commands
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// First page to fetch
    #[arg(long, default_value = "1")]
    pub first_page: u32,

    /// Stop before this page (fetch until an empty page when omitted)
    #[arg(long)]
    pub last_page: Option<u32>,

    /// Records per page
    #[arg(long, default_value = "10")]
    pub per_page: u32,
}

impl From<PageArgs> for PageOptions {
    fn from(args: PageArgs) -> Self {
        PageOptions {
            first_page: args.first_page,
            last_page: args.last_page,
            per_page: args.per_page,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_paginated_command() {
        let cli = Cli::try_parse_from([
            "jwstapi",
            "--api-key",
            "k",
            "program",
            "2731",
            "--first-page",
            "2",
            "--last-page",
            "4",
            "--per-page",
            "25",
        ])
        .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("k"));
        match cli.command {
            Commands::Program { program_id, pages } => {
                assert_eq!(program_id, "2731");
                let options = PageOptions::from(pages);
                assert_eq!(options, PageOptions::new().first_page(2).last_page(4).per_page(25));
            }
            other => panic!("Expected Program, got {other:?}"),
        }
    }

    #[test]
    fn test_page_args_defaults() {
        let cli = Cli::try_parse_from(["jwstapi", "file-type", "fits"]).unwrap();
        match cli.command {
            Commands::FileType { file_type, pages } => {
                assert_eq!(file_type, "fits");
                assert_eq!(PageOptions::from(pages), PageOptions::default());
            }
            other => panic!("Expected FileType, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["jwstapi", "suffixes", "--format", "pretty", "-v"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Suffixes));
    }
}
