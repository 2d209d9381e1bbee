//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::JwstClient;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::ApiResponse;
use serde::Serialize;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command.
    ///
    /// A failure payload from the API is printed to stderr and reported as
    /// `ExitCode::FAILURE`; everything else that goes wrong is an `Err`.
    pub async fn run(&self) -> Result<ExitCode> {
        let client = JwstClient::with_config(self.client_config()?)?;

        match &self.cli.command {
            Commands::Version => self.emit(client.version().await?),
            Commands::Programs => self.emit(client.programs_list().await?),
            Commands::Suffixes => self.emit(client.suffixes_list().await?),
            Commands::Program { program_id, pages } => {
                self.emit(client.program_data(program_id, (*pages).into()).await?)
            }
            Commands::Suffix { suffix, pages } => {
                self.emit(client.data_by_suffix(suffix, (*pages).into()).await?)
            }
            Commands::FileType { file_type, pages } => {
                self.emit(client.files_by_type(file_type, (*pages).into()).await?)
            }
            Commands::Observation { observation, pages } => {
                self.emit(client.data_by_observation(observation, (*pages).into()).await?)
            }
        }
    }

    /// Build the client config from the config file and flags.
    ///
    /// Flags override values from the file.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match (&self.cli.config, &self.cli.api_key) {
            (Some(path), _) => ClientConfig::from_file(path)?,
            (None, Some(key)) => ClientConfig::new(key.as_str()),
            (None, None) => {
                return Err(Error::config(
                    "API key not specified (use --api-key, JWST_API_KEY or --config)",
                ))
            }
        };

        if let (Some(_), Some(key)) = (&self.cli.config, &self.cli.api_key) {
            config.api_key.clone_from(key);
        }
        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(timeout) = self.cli.timeout {
            config = config.timeout(Duration::from_secs(timeout));
        }

        config.validate()?;
        Ok(config)
    }

    fn emit<T: Serialize>(&self, response: ApiResponse<T>) -> Result<ExitCode> {
        match response {
            ApiResponse::Data(data) => {
                println!("{}", self.render(&data)?);
                Ok(ExitCode::SUCCESS)
            }
            ApiResponse::Failure(payload) => {
                info!("API returned a failure payload");
                eprintln!("API error: {}", self.render(&payload)?);
                Ok(ExitCode::FAILURE)
            }
        }
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        Ok(rendered)
    }
}
