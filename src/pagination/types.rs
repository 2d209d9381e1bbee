//! Pagination types and traits
//!
//! Defines the page options callers pass in, the cursor tracked during one
//! pagination run, and the page source abstraction the paginator reads from.

use crate::error::{Error, Result};
use crate::types::{ApiResponse, JsonValue};
use async_trait::async_trait;
use url::Url;

/// Query parameter name for the page number
pub const PAGE_PARAM: &str = "page";

/// Query parameter name for the page size
pub const PER_PAGE_PARAM: &str = "perPage";

/// Caller-facing page selection for a paginated endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    /// First page to request (1-based)
    pub first_page: u32,
    /// Exclusive upper bound; `None` means "until an empty page"
    pub last_page: Option<u32>,
    /// Records per page
    pub per_page: u32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            first_page: 1,
            last_page: None,
            per_page: 10,
        }
    }
}

impl PageOptions {
    /// Create page options with defaults (page 1, unbounded, 10 per page)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first page
    #[must_use]
    pub fn first_page(mut self, page: u32) -> Self {
        self.first_page = page;
        self
    }

    /// Set the exclusive last page
    #[must_use]
    pub fn last_page(mut self, page: u32) -> Self {
        self.last_page = Some(page);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Check if a last page bound is set
    pub fn is_bounded(&self) -> bool {
        self.last_page.is_some()
    }

    /// Reject options the API cannot serve
    pub fn validate(&self) -> Result<()> {
        if self.first_page == 0 {
            return Err(Error::page_options("first_page must be at least 1"));
        }
        if self.per_page == 0 {
            return Err(Error::page_options("per_page must be at least 1"));
        }
        if self.last_page == Some(0) {
            return Err(Error::page_options("last_page must be at least 1 when set"));
        }
        Ok(())
    }
}

/// Transient page state for a single pagination run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationCursor {
    /// Page to request next
    pub current_page: u32,
    /// Records per page
    pub per_page: u32,
    /// Exclusive upper bound, if any
    pub last_page: Option<u32>,
}

impl PaginationCursor {
    /// Start a cursor at the first page of `options`
    pub fn new(options: &PageOptions) -> Self {
        Self {
            current_page: options.first_page,
            per_page: options.per_page,
            last_page: options.last_page,
        }
    }

    /// Check if the bound has been reached.
    ///
    /// The bound is exclusive: with `last_page = 3` pages 1 and 2 are
    /// fetched and page 3 is not. An unbounded cursor is never exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.last_page
            .is_some_and(|last_page| self.current_page >= last_page)
    }

    /// Move to the next page, failing once the page number cannot grow
    pub fn advance(&mut self) -> Result<()> {
        self.current_page = self.current_page.checked_add(1).ok_or_else(|| {
            Error::page_options(format!(
                "page number overflow after page {}",
                self.current_page
            ))
        })?;
        Ok(())
    }

    /// Query parameters for the current page
    pub fn query(&self) -> [(&'static str, u32); 2] {
        [
            (PAGE_PARAM, self.current_page),
            (PER_PAGE_PARAM, self.per_page),
        ]
    }
}

/// Something that can serve one page of a paginated endpoint
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page the cursor points at and return the unwrapped envelope
    async fn fetch_page(
        &self,
        url: &Url,
        cursor: &PaginationCursor,
    ) -> Result<ApiResponse<JsonValue>>;
}
