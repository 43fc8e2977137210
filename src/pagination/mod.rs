//! Pagination module
//!
//! Page-number pagination as served by the API: `page`, `count` and
//! `order` query parameters, with a short page marking the end.
//!
//! # Overview
//!
//! - `PaginationOptions` - page walk configuration
//! - `next_page_spec` - pure computation of the request for one page
//! - `collect_all` / `paginate` - walk a whole collection, eagerly or lazily

mod cursor;
mod paginator;
mod types;

pub use cursor::{batch_pages, next_page_spec};
pub use paginator::{collect_all, fetch_page, paginate};
pub use types::{Order, PaginationOptions, DEFAULT_BATCH_SIZE, MAX_PAGE_SIZE};
