//! Pagination types
//!
//! Defines the page walk configuration shared by single-page endpoints and
//! the auto-paginator.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Largest page the API will return
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default number of pages requested concurrently by `*_all` calls
pub const DEFAULT_BATCH_SIZE: u32 = 10;

/// Server-side sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            other => Err(Error::invalid_value(
                "order",
                format!("'{other}' must be equal to one of the allowed values: asc, desc"),
            )),
        }
    }
}

/// Page walk configuration
///
/// `page`, `count` and `order` are sent as query parameters. `batch_size`
/// is only read by the auto-paginator and bounds how many pages are in
/// flight at once. `count` is not clamped: a page shorter than `count` is
/// what ends a walk, so it must not exceed [`MAX_PAGE_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationOptions {
    /// First page to request (1-based)
    pub page: u32,
    /// Items per page
    pub count: u32,
    /// Sort direction
    pub order: Order,
    /// Pages requested concurrently by the auto-paginator
    pub batch_size: u32,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page: 1,
            count: MAX_PAGE_SIZE,
            order: Order::Asc,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl PaginationOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting page
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the sort direction
    #[must_use]
    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Set the number of concurrent page requests
    #[must_use]
    pub fn batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Resolve optional caller options to concrete ones
    pub fn or_default(options: Option<&PaginationOptions>) -> PaginationOptions {
        options.copied().unwrap_or_default()
    }

    /// Check the options against the limits the API enforces
    pub fn validate(&self) -> Result<()> {
        if self.page < 1 {
            return Err(Error::invalid_value("page", "must be >= 1"));
        }
        if self.count < 1 || self.count > MAX_PAGE_SIZE {
            return Err(Error::invalid_value(
                "count",
                format!("must be between 1 and {MAX_PAGE_SIZE}"),
            ));
        }
        if self.batch_size < 1 {
            return Err(Error::invalid_value("batch_size", "must be >= 1"));
        }
        Ok(())
    }

    /// Query parameters for the given page
    pub fn query_pairs(&self, page: u32) -> [(&'static str, String); 3] {
        [
            ("page", page.to_string()),
            ("count", self.count.to_string()),
            ("order", self.order.as_str().to_string()),
        ]
    }

    /// Whether a page with `len` items is the last one
    pub fn is_last_page(&self, len: usize) -> bool {
        len == 0 || len < self.count as usize
    }
}
