//! Table projection
//!
//! Pagination math over the raw row collection. Pages are 1-indexed;
//! the projection only slices - navigation controls are expected to
//! disable out-of-range transitions, and an out-of-range request here
//! just yields an empty slice.

use denguemap_core::RawRecord;

/// How many page links the pagination strip shows at most
const PAGE_LINKS_SHOWN: usize = 10;

/// A paginated view over uploaded rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableProjection {
    rows: Vec<RawRecord>,
    page_size: usize,
}

impl TableProjection {
    /// Project a row collection at a given page size
    #[inline]
    #[must_use]
    pub fn new(rows: Vec<RawRecord>, page_size: usize) -> Self {
        Self { rows, page_size }
    }

    /// Column headers, taken from the first row's field order.
    ///
    /// An empty collection renders no columns.
    #[must_use]
    pub fn headers(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.field_names().collect())
            .unwrap_or_default()
    }

    /// Total number of pages (`ceil(rows / page_size)`)
    #[must_use]
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.rows.len().div_ceil(self.page_size)
    }

    /// One page of rows, 1-indexed. Out of range (however far) is an
    /// empty slice, never a panic.
    #[must_use]
    pub fn page(&self, page_number: usize) -> &[RawRecord] {
        if page_number == 0 || self.page_size == 0 {
            return &[];
        }
        let start = match (page_number - 1).checked_mul(self.page_size) {
            Some(start) if start < self.rows.len() => start,
            _ => return &[],
        };
        let end = start.saturating_add(self.page_size).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Page numbers for the pagination strip: at most ten links,
    /// centered on the current page, clamped to `[1, total_pages]`.
    #[must_use]
    pub fn page_window(&self, current: usize) -> Vec<usize> {
        let total = self.total_pages();
        let mut start = current.saturating_sub(4).max(1);
        let end = total.min(start.saturating_add(PAGE_LINKS_SHOWN - 1));
        if end.saturating_sub(start) + 1 < PAGE_LINKS_SHOWN {
            start = end.saturating_sub(PAGE_LINKS_SHOWN - 1).max(1);
        }
        (start..=end).collect()
    }

    /// Total number of rows behind the projection
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows per page
    #[inline]
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}
