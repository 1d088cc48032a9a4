//! Page count and page window arithmetic.

use crate::state::PerPage;

/// Number of pages for `total` rows.
///
/// Rounds to the nearest page count instead of rounding up, so 24 rows at
/// 10 per page is 2 pages and the last 4 rows are only reachable by paging
/// past the last page.
pub fn page_count(per_page: PerPage, total: usize) -> usize {
    match per_page.count() {
        None => 1,
        Some(n) => (total as f64 / n as f64).round() as usize,
    }
}

/// Half-open row range `[start, end)` of one page, before clamping to the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    /// The window for `page_number` (1-based) over `total` rows.
    pub fn new(per_page: PerPage, page_number: usize, total: usize) -> Self {
        match per_page.count() {
            None => Self { start: 0, end: total },
            Some(n) => {
                let start = page_number.saturating_sub(1).saturating_mul(n);
                Self {
                    start,
                    end: start.saturating_add(n),
                }
            }
        }
    }

    /// The part of `items` inside the window. Out-of-range windows give an
    /// empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }
}
