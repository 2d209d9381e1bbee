//! The shared pagination routine

use super::types::{PageOptions, PageSource, PaginationCursor};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::types::{ApiResponse, JsonValue, Record};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

#[async_trait]
impl PageSource for HttpClient {
    async fn fetch_page(
        &self,
        url: &Url,
        cursor: &PaginationCursor,
    ) -> Result<ApiResponse<JsonValue>> {
        self.get_envelope(url, &cursor.query()).await
    }
}

/// Fetch pages from `url` in order and accumulate their records.
///
/// Stops when a page comes back empty or, if `options.last_page` is set, when
/// that (excluded) page is reached. A failure envelope on any page is returned
/// as-is and the records gathered so far are dropped.
pub async fn collect_pages<S>(
    source: &S,
    url: &Url,
    options: &PageOptions,
) -> Result<ApiResponse<Vec<Record>>>
where
    S: PageSource + ?Sized,
{
    options.validate()?;

    let mut cursor = PaginationCursor::new(options);
    let mut records = Vec::new();

    while !cursor.is_exhausted() {
        let page = match source.fetch_page(url, &cursor).await? {
            ApiResponse::Data(body) => page_records(body)?,
            ApiResponse::Failure(payload) => {
                debug!(
                    "Pagination of {} aborted at page {}, dropping {} records",
                    url,
                    cursor.current_page,
                    records.len()
                );
                return Ok(ApiResponse::Failure(payload));
            }
        };

        if page.is_empty() {
            debug!("Page {} of {} is empty, stopping", cursor.current_page, url);
            break;
        }

        debug!(
            "Page {} of {}: {} records",
            cursor.current_page,
            url,
            page.len()
        );
        records.extend(page);
        cursor.advance()?;
    }

    debug!("Collected {} records from {}", records.len(), url);
    Ok(ApiResponse::Data(records))
}

/// Interpret a page body as a list of records; `null` counts as empty
fn page_records(body: JsonValue) -> Result<Vec<Record>> {
    match body {
        JsonValue::Array(records) => Ok(records),
        JsonValue::Null => Ok(Vec::new()),
        other => Err(Error::unexpected_response(
            200,
            format!("expected a list of records, got {}", json_kind(&other)),
        )),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
