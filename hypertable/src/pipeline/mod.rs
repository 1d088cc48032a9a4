//! Derived view: sort, page window, search, then presentation bookkeeping.
//!
//! [`derive_view`] recomputes everything from the state on each call and
//! keeps nothing between calls.

pub mod filter;
pub mod sort;
pub mod window;

use std::fmt;

use crate::config::FilterScope;
use crate::format::format_cell;
use crate::schema::{Column, Row};
use crate::state::{SortDir, ViewState};

pub use window::{PageWindow, page_count};

// =============================================================================
// Output types
// =============================================================================

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    /// Direction when this is the active sort column.
    pub sort: Option<SortDir>,
}

impl HeaderCell {
    /// Title with the sort arrow appended on the active column.
    pub fn label(&self) -> String {
        match self.sort {
            Some(dir) => format!("{} {}", self.title, dir.indicator()),
            None => self.title.clone(),
        }
    }
}

/// A row chosen for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedRow {
    /// Position of the row in the source dataset.
    pub index: usize,
    pub row: Row,
    /// Formatted cell per column, in column order.
    pub cells: Vec<String>,
}

/// "Showing X to Y of Z (filtered from W)".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub from: usize,
    pub to: usize,
    pub of: usize,
    /// Dataset size, present while a search is active.
    pub filtered_from: Option<usize>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} to {} of {}", self.from, self.to, self.of)?;
        if let Some(total) = self.filtered_from {
            write!(f, " (filtered from {total})")?;
        }
        Ok(())
    }
}

/// Pager position and which navigation controls are usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page_number: usize,
    pub page_count: usize,
    /// First and previous.
    pub back_disabled: bool,
    /// Next and last. Only on the page equal to the page count, so with zero
    /// pages, or past the end, they stay usable.
    pub forward_disabled: bool,
}

impl Pager {
    pub fn new(page_number: usize, page_count: usize) -> Self {
        Self {
            page_number,
            page_count,
            back_disabled: page_number <= 1,
            forward_disabled: page_number == page_count,
        }
    }

    pub fn prev_page(&self) -> usize {
        self.page_number.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> usize {
        self.page_number.saturating_add(1)
    }

    pub fn last_page(&self) -> usize {
        self.page_count.max(1)
    }
}

/// Everything the host needs to present the table for one state.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    pub header: Vec<HeaderCell>,
    pub rows: Vec<PresentedRow>,
    pub page_count: usize,
    pub window_start: usize,
    /// Unclamped: may exceed the row count on the last page.
    pub window_end: usize,
    pub summary: Summary,
    pub pager: Pager,
}

// =============================================================================
// Pipeline
// =============================================================================

/// Compute the presented rows and bookkeeping for `state`.
///
/// Under [`FilterScope::Page`] the search runs after the page window is cut,
/// so it only finds rows on the current page.
pub fn derive_view(state: &ViewState) -> DerivedView {
    let rows = &state.rows[..];
    let columns = &state.columns[..];

    let mut order = sort::sorted_order(rows, &state.sort_key, state.sort_dir);
    log::trace!(
        "derive_view sorted {} rows by {:?} {:?}",
        order.len(),
        state.sort_key,
        state.sort_dir
    );

    let (window, visible) = match state.filter_scope {
        FilterScope::Page => {
            let window = PageWindow::new(state.per_page, state.page_number, order.len());
            let mut visible = window.slice(&order).to_vec();
            filter::retain_matching(&mut visible, rows, columns, &state.filter);
            (window, visible)
        }
        FilterScope::Dataset => {
            filter::retain_matching(&mut order, rows, columns, &state.filter);
            let window = PageWindow::new(state.per_page, state.page_number, order.len());
            (window, window.slice(&order).to_vec())
        }
    };

    let page_count = page_count(state.per_page, paginated_len(state));
    log::trace!(
        "derive_view window {}..{} kept {} rows, {} pages",
        window.start,
        window.end,
        visible.len(),
        page_count
    );

    let presented: Vec<PresentedRow> = visible
        .into_iter()
        .map(|index| present(index, &rows[index], columns))
        .collect();

    let summary = Summary {
        from: window.start.saturating_add(1),
        to: presented.len(),
        of: presented.len(),
        filtered_from: (!state.filter.is_empty()).then_some(rows.len()),
    };

    DerivedView {
        header: header(state),
        rows: presented,
        page_count,
        window_start: window.start,
        window_end: window.end,
        summary,
        pager: Pager::new(state.page_number, page_count),
    }
}

/// Number of rows that paging runs over: the dataset, or under
/// [`FilterScope::Dataset`] the rows matching the search.
pub fn paginated_len(state: &ViewState) -> usize {
    match state.filter_scope {
        FilterScope::Page => state.rows.len(),
        FilterScope::Dataset if state.filter.is_empty() => state.rows.len(),
        FilterScope::Dataset => {
            let needle = filter::normalize(&state.filter);
            state
                .rows
                .iter()
                .filter(|row| filter::matches(row, &state.columns, &needle))
                .count()
        }
    }
}

fn header(state: &ViewState) -> Vec<HeaderCell> {
    state
        .columns
        .iter()
        .map(|column| HeaderCell {
            key: column.key.clone(),
            title: column.title.clone(),
            sort: (state.is_sorted() && column.key == state.sort_key).then_some(state.sort_dir),
        })
        .collect()
}

fn present(index: usize, row: &Row, columns: &[Column]) -> PresentedRow {
    PresentedRow {
        index,
        row: row.clone(),
        cells: columns
            .iter()
            .map(|column| format_cell(row.get(&column.key), column.column_type))
            .collect(),
    }
}
