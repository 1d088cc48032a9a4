//! View state and the patches that replace it.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::FilterScope;
use crate::error::TableError;
use crate::schema::{Column, Row};

// =============================================================================
// PerPage
// =============================================================================

/// Page size: a positive row count or the show-all sentinel.
///
/// On the wire (select values, JSON config) the sentinel is `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum PerPage {
    Rows(NonZeroUsize),
    All,
}

impl PerPage {
    /// Ten rows per page.
    pub const DEFAULT: PerPage = PerPage::rows_or_all(10);

    /// `n` rows per page, or `All` when `n` is zero.
    pub const fn rows_or_all(n: usize) -> Self {
        match NonZeroUsize::new(n) {
            Some(n) => PerPage::Rows(n),
            None => PerPage::All,
        }
    }

    /// Wire value: the row count, or -1 for all rows.
    pub fn to_i64(self) -> i64 {
        match self {
            PerPage::Rows(n) => i64::try_from(n.get()).unwrap_or(i64::MAX),
            PerPage::All => -1,
        }
    }

    /// Row count, or `None` when showing all rows.
    pub fn count(self) -> Option<usize> {
        match self {
            PerPage::Rows(n) => Some(n.get()),
            PerPage::All => None,
        }
    }

    /// Label for a page-size selector.
    pub fn label(self) -> String {
        match self {
            PerPage::Rows(n) => n.to_string(),
            PerPage::All => "All".to_string(),
        }
    }
}

impl Default for PerPage {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for PerPage {
    type Error = TableError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value == -1 {
            return Ok(PerPage::All);
        }
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(PerPage::Rows)
            .ok_or(TableError::InvalidPageSize(value))
    }
}

impl From<PerPage> for i64 {
    fn from(value: PerPage) -> Self {
        value.to_i64()
    }
}

impl fmt::Display for PerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i64())
    }
}

// =============================================================================
// SortDir
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    /// The other direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    /// Arrow shown next to the active sort column's title.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDir::Asc => "↑",
            SortDir::Desc => "↓",
        }
    }
}

// =============================================================================
// ViewState
// =============================================================================

/// The complete interactive state of one table.
///
/// Never mutated in place: transitions build a new state with
/// [`ViewState::apply`]. `columns` and `rows` are shared, so applying a patch
/// that doesn't touch them doesn't copy the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub columns: Arc<[Column]>,
    pub rows: Arc<[Row]>,
    /// 1-based.
    pub page_number: usize,
    pub per_page: PerPage,
    /// Empty means unsorted.
    pub sort_key: String,
    pub sort_dir: SortDir,
    pub filter: String,
    pub filter_scope: FilterScope,
}

impl ViewState {
    /// Initial state: first page, ten rows, unsorted, no search.
    pub fn new(columns: impl Into<Arc<[Column]>>, rows: impl Into<Arc<[Row]>>) -> Self {
        Self {
            columns: columns.into(),
            rows: rows.into(),
            page_number: 1,
            per_page: PerPage::DEFAULT,
            sort_key: String::new(),
            sort_dir: SortDir::Asc,
            filter: String::new(),
            filter_scope: FilterScope::default(),
        }
    }

    /// Set the initial page size.
    pub fn with_per_page(mut self, per_page: PerPage) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the filter scope.
    pub fn with_filter_scope(mut self, scope: FilterScope) -> Self {
        self.filter_scope = scope;
        self
    }

    /// Whether a sort column is selected.
    pub fn is_sorted(&self) -> bool {
        !self.sort_key.is_empty()
    }

    /// Shallow-merge `patch` onto this state, producing the next state.
    pub fn apply(&self, patch: ViewPatch) -> Self {
        let ViewPatch {
            rows,
            page_number,
            per_page,
            sort_key,
            sort_dir,
            filter,
        } = patch;

        Self {
            columns: Arc::clone(&self.columns),
            rows: rows.unwrap_or_else(|| Arc::clone(&self.rows)),
            page_number: page_number.unwrap_or(self.page_number),
            per_page: per_page.unwrap_or(self.per_page),
            sort_key: sort_key.unwrap_or_else(|| self.sort_key.clone()),
            sort_dir: sort_dir.unwrap_or(self.sort_dir),
            filter: filter.unwrap_or_else(|| self.filter.clone()),
            filter_scope: self.filter_scope,
        }
    }
}

// =============================================================================
// ViewPatch
// =============================================================================

/// A partial [`ViewState`]. `None` fields keep the previous value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewPatch {
    pub rows: Option<Arc<[Row]>>,
    pub page_number: Option<usize>,
    pub per_page: Option<PerPage>,
    pub sort_key: Option<String>,
    pub sort_dir: Option<SortDir>,
    pub filter: Option<String>,
}

impl ViewPatch {
    pub fn rows(mut self, rows: impl Into<Arc<[Row]>>) -> Self {
        self.rows = Some(rows.into());
        self
    }

    pub fn page_number(mut self, page_number: usize) -> Self {
        self.page_number = Some(page_number);
        self
    }

    pub fn per_page(mut self, per_page: PerPage) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn sort_key(mut self, key: impl Into<String>) -> Self {
        self.sort_key = Some(key.into());
        self
    }

    pub fn sort_dir(mut self, dir: SortDir) -> Self {
        self.sort_dir = Some(dir);
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// True when applying this patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
