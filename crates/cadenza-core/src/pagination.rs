//! Pagination parameters for list operations.

use serde::{Deserialize, Serialize};

/// A request for a page of results.
///
/// Pages are 1-indexed: `page = 1` is the first page, and the store offset
/// is `(page - 1) * limit`. There is deliberately no upper bound on `limit`;
/// callers requesting very large pages are flagged via [`PageQuery::is_oversized`]
/// and logged, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// The page number (1-indexed).
    pub page: u32,
    /// The number of items per page.
    pub limit: u32,
}

impl PageQuery {
    /// The default page number.
    pub const DEFAULT_PAGE: u32 = 1;
    /// The default page size.
    pub const DEFAULT_LIMIT: u32 = 10;
    /// Page sizes above this are logged as a capacity risk.
    pub const OVERSIZED_LIMIT: u32 = 1000;

    /// Creates a new page query. A page number of zero is treated as the
    /// first page.
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit,
        }
    }

    /// Creates a page query from optional query parameters, applying the
    /// defaults (`page = 1`, `limit = 10`) for absent values.
    #[must_use]
    pub fn from_params(page: Option<u32>, limit: Option<u32>) -> Self {
        Self::new(
            page.unwrap_or(Self::DEFAULT_PAGE),
            limit.unwrap_or(Self::DEFAULT_LIMIT),
        )
    }

    /// Returns the offset for store queries.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page.saturating_sub(1) as u64) * (self.limit as u64)
    }

    /// Returns the limit for store queries.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit as u64
    }

    /// Whether this query asks for a page large enough to be a capacity risk.
    #[must_use]
    pub const fn is_oversized(&self) -> bool {
        self.limit > Self::OVERSIZED_LIMIT
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_LIMIT)
    }
}
