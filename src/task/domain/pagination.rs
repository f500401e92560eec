//! Limit/offset windowing over the newest-first task listing.

use super::TaskDomainError;

/// Validated limit/offset pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    limit: u64,
    offset: u64,
}

impl PageRequest {
    /// Page size used when the caller does not supply a limit.
    pub const DEFAULT_LIMIT: u64 = 10;

    /// Offset used when the caller does not supply one.
    pub const DEFAULT_OFFSET: u64 = 0;

    /// Builds a page request, applying defaults for absent values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NegativePagination`] when either value is
    /// negative.
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Result<Self, TaskDomainError> {
        Ok(Self {
            limit: non_negative("limit", limit, Self::DEFAULT_LIMIT)?,
            offset: non_negative("offset", offset, Self::DEFAULT_OFFSET)?,
        })
    }

    /// Returns the maximum number of items in the page.
    #[must_use]
    pub const fn limit(self) -> u64 {
        self.limit
    }

    /// Returns the number of items skipped before the page.
    #[must_use]
    pub const fn offset(self) -> u64 {
        self.offset
    }

    /// Returns `true` when items remain after this window given `total`.
    #[must_use]
    pub const fn has_next_page(self, total: u64) -> bool {
        self.offset.saturating_add(self.limit) < total
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: Self::DEFAULT_OFFSET,
        }
    }
}

fn non_negative(
    field: &'static str,
    value: Option<i64>,
    default: u64,
) -> Result<u64, TaskDomainError> {
    value.map_or(Ok(default), |raw| {
        u64::try_from(raw).map_err(|_| TaskDomainError::NegativePagination { field, value: raw })
    })
}

/// One page of results with the window that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items: Vec<T>,
    total: u64,
    request: PageRequest,
}

impl<T> Page<T> {
    /// Wraps a fetched window and the total count across all pages.
    #[must_use]
    pub const fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    /// Returns the items in this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns the total number of items across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns the limit that produced this page.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.request.limit()
    }

    /// Returns the offset that produced this page.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.request.offset()
    }

    /// Returns `true` when `offset + limit < total`.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.request.has_next_page(self.total)
    }
}
