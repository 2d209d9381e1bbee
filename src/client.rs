//! JWST API client
//!
//! [`JwstClient`] exposes the endpoints of `api.jwstapi.com`. The list
//! endpoints are single requests; the data endpoints are paginated and share
//! [`collect_pages`].
//!
//! Every method returns `Result<ApiResponse<T>>`:
//! - `Err(_)` when the request could not complete or the response could not
//!   be interpreted (transport failure, malformed envelope, missing field)
//! - `Ok(ApiResponse::Failure(payload))` when the API answered with an
//!   `{"error": ...}` envelope
//! - `Ok(ApiResponse::Data(_))` otherwise

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::{collect_pages, PageOptions};
use crate::types::{ApiResponse, JsonValue, ProgramEntry, Record, SuffixInfo};
use tracing::debug;
use url::Url;

const NO_QUERY: &[(&str, &str)] = &[];

/// Client for the JWST data API
#[derive(Debug)]
pub struct JwstClient {
    base_url: Url,
    http: HttpClient,
}

impl JwstClient {
    /// Create a client for the public API with default settings.
    ///
    /// The key is not validated; a bad key shows up as a failure payload on
    /// the first call.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client from a full configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl {
                url: config.base_url,
            });
        }

        let mut http_config = HttpClientConfig::builder()
            .api_key(config.api_key.as_str())
            .timeout(config.timeout_duration())
            .user_agent(config.user_agent.as_str());
        if let Some(limit) = config.rate_limit.clone() {
            http_config = http_config.rate_limit(limit);
        }

        let http = HttpClient::with_config(http_config.build())?;
        debug!(
            "Created JWST client for {} (rate limited: {})",
            base_url,
            http.has_rate_limiter()
        );

        Ok(Self { base_url, http })
    }

    /// Base URL all endpoints are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the API version information (`GET /`)
    pub async fn version(&self) -> Result<ApiResponse<JsonValue>> {
        self.http.get_envelope(&self.base_url, NO_QUERY).await
    }

    /// List the identifiers of all programs (`GET /program/list`)
    pub async fn programs_list(&self) -> Result<ApiResponse<Vec<String>>> {
        let url = self.endpoint(&["program", "list"])?;
        self.http
            .get_envelope(&url, NO_QUERY)
            .await?
            .try_map(|body| {
                let entries: Vec<ProgramEntry> = serde_json::from_value(body)
                    .map_err(|e| Error::projection("programs", e))?;
                Ok(entries.into_iter().map(|entry| entry.program).collect())
            })
    }

    /// List all known file suffixes (`GET /suffix/list`)
    pub async fn suffixes_list(&self) -> Result<ApiResponse<Vec<SuffixInfo>>> {
        let url = self.endpoint(&["suffix", "list"])?;
        self.http
            .get_envelope(&url, NO_QUERY)
            .await?
            .try_map(|body| {
                serde_json::from_value(body).map_err(|e| Error::projection("suffixes", e))
            })
    }

    /// Get all records of a program (`GET /program/id/{program_id}`)
    pub async fn program_data(
        &self,
        program_id: &str,
        options: PageOptions,
    ) -> Result<ApiResponse<Vec<Record>>> {
        self.paginate(&["program", "id", program_id], options).await
    }

    /// Get all records with a file suffix (`GET /all/suffix/{suffix}`)
    pub async fn data_by_suffix(
        &self,
        suffix: &str,
        options: PageOptions,
    ) -> Result<ApiResponse<Vec<Record>>> {
        self.paginate(&["all", "suffix", suffix], options).await
    }

    /// Get all files of a type (`GET /all/type/{file_type}`)
    pub async fn files_by_type(
        &self,
        file_type: &str,
        options: PageOptions,
    ) -> Result<ApiResponse<Vec<Record>>> {
        self.paginate(&["all", "type", file_type], options).await
    }

    /// Get all records of an observation (`GET /observation/{observation}`)
    pub async fn data_by_observation(
        &self,
        observation: &str,
        options: PageOptions,
    ) -> Result<ApiResponse<Vec<Record>>> {
        self.paginate(&["observation", observation], options).await
    }

    async fn paginate(
        &self,
        segments: &[&str],
        options: PageOptions,
    ) -> Result<ApiResponse<Vec<Record>>> {
        let url = self.endpoint(segments)?;
        collect_pages(&self.http, &url, &options).await
    }

    /// Resolve path segments against the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
