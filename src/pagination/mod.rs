//! Pagination module
//!
//! Page-number pagination over `?page=N&perPage=M`.
//!
//! # Overview
//!
//! Every paginated endpoint of the API shares one routine,
//! [`collect_pages`], which requests pages strictly in order and
//! accumulates their records. Two modes are supported:
//!
//! - **Bounded**: `last_page` is set and pages `first_page..last_page` are
//!   requested (the upper bound is excluded).
//! - **Unbounded**: pages are requested until one comes back empty.
//!
//! Either mode stops early on an empty page, and a failure envelope on any
//! page replaces the whole result.

mod paginator;
mod types;

pub use paginator::collect_pages;
pub use types::{PageOptions, PageSource, PaginationCursor};
