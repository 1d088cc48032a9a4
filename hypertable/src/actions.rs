//! State transitions.
//!
//! Every action reads the current state and an input and returns a
//! [`ViewPatch`]. None of them touch anything else.

use std::sync::Arc;

use crate::config::FilterScope;
use crate::pipeline::{self, page_count};
use crate::schema::Row;
use crate::state::{PerPage, SortDir, ViewPatch, ViewState};

/// A user interaction or host update, ready to be reduced against a state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetPageNumber(usize),
    /// Header click on the column with this key.
    SortBy(String),
    SetPerPage(PerPage),
    SetFilter(String),
    /// The host swapped the dataset.
    ReplaceRows(Arc<[Row]>),
}

impl Action {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetPageNumber(_) => "set_page_number",
            Action::SortBy(_) => "handle_sort_change",
            Action::SetPerPage(_) => "set_per_page",
            Action::SetFilter(_) => "set_filter",
            Action::ReplaceRows(_) => "replace_rows",
        }
    }

    /// Compute the patch this action makes to `state`.
    pub fn reduce(&self, state: &ViewState) -> ViewPatch {
        match self {
            Action::SetPageNumber(n) => set_page_number(*n),
            Action::SortBy(key) => handle_sort_change(state, key),
            Action::SetPerPage(per_page) => set_per_page(state, *per_page),
            Action::SetFilter(text) => set_filter(state, text),
            Action::ReplaceRows(rows) => replace_rows(state, Arc::clone(rows)),
        }
    }
}

/// Jump to page `n`.
///
/// Does not check `n` against the page count. Page numbers are 1-based, so
/// 0 becomes 1.
pub fn set_page_number(n: usize) -> ViewPatch {
    ViewPatch::default().page_number(n.max(1))
}

/// A click on the column `key`: the active column flips direction, any other
/// column becomes active ascending.
pub fn handle_sort_change(state: &ViewState, key: &str) -> ViewPatch {
    if state.sort_key == key {
        ViewPatch::default().sort_dir(state.sort_dir.toggled())
    } else {
        ViewPatch::default().sort_key(key).sort_dir(SortDir::Asc)
    }
}

/// Change the page size, moving back to the new last page when the current
/// page would no longer exist.
pub fn set_per_page(state: &ViewState, per_page: PerPage) -> ViewPatch {
    let patch = ViewPatch::default().per_page(per_page);
    let pages = page_count(per_page, pipeline::paginated_len(state));
    clamp_page(state.page_number, pages, patch)
}

/// Set the search text as typed.
///
/// Under [`FilterScope::Dataset`] the match count decides the page count, so
/// the page moves back to the new last page when it would no longer exist.
/// Under [`FilterScope::Page`] the page is left alone.
pub fn set_filter(state: &ViewState, text: &str) -> ViewPatch {
    let patch = ViewPatch::default().filter(text);
    match state.filter_scope {
        FilterScope::Page => patch,
        FilterScope::Dataset => {
            let next = ViewState {
                filter: text.to_string(),
                ..state.clone()
            };
            let pages = page_count(state.per_page, pipeline::paginated_len(&next));
            clamp_page(state.page_number, pages, patch)
        }
    }
}

/// Replace the dataset, moving back to the new last page when the current
/// page would no longer exist.
pub fn replace_rows(state: &ViewState, rows: Arc<[Row]>) -> ViewPatch {
    let next = ViewState {
        rows: Arc::clone(&rows),
        ..state.clone()
    };
    let pages = page_count(state.per_page, pipeline::paginated_len(&next));
    clamp_page(state.page_number, pages, ViewPatch::default().rows(rows))
}

fn clamp_page(page_number: usize, pages: usize, patch: ViewPatch) -> ViewPatch {
    let last = pages.max(1);
    if page_number > last {
        patch.page_number(last)
    } else {
        patch
    }
}
