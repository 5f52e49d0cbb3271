//! Offset pagination arithmetic shared by every list endpoint.
//!
//! Inputs are normalized, never rejected: a zero or negative page becomes the
//! first page, and an out-of-range page size is pulled back into bounds.

use serde::Serialize;

/// Page size used when the caller omits `limit` or sends a non-positive one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on `limit`.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A normalized `(page, limit)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Build a page request from raw query values.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: normalize_page(page.unwrap_or(0)),
            limit: normalize_limit(limit.unwrap_or(0)),
        }
    }

    /// Number of rows to skip. Saturates at `i64::MAX`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Build the response metadata for a result set of `total` rows.
    pub fn meta(&self, total: i64) -> PaginationMeta {
        PaginationMeta {
            current_page: self.page,
            per_page: self.limit,
            total,
            total_pages: total_pages(total, self.limit),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Pagination block of the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub current_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// `limit <= 0` falls back to the default; anything above the maximum is capped.
pub fn normalize_limit(limit: i64) -> i64 {
    if limit <= 0 {
        DEFAULT_PAGE_SIZE
    } else {
        limit.min(MAX_PAGE_SIZE)
    }
}

/// `page <= 0` becomes page 1.
pub fn normalize_page(page: i64) -> i64 {
    page.max(1)
}

/// Ceiling division of `total` by `limit`; zero when `limit` is not positive.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}
