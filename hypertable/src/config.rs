//! Table configuration types.

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::state::PerPage;

/// Which rows the search text is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterScope {
    /// Only rows inside the current page window. Search runs after paging,
    /// so matches on other pages are not shown.
    #[default]
    Page,

    /// The whole sorted dataset. Paging then runs over the matches.
    Dataset,
}

fn default_page_size_options() -> Vec<PerPage> {
    vec![
        PerPage::rows_or_all(5),
        PerPage::rows_or_all(10),
        PerPage::rows_or_all(20),
        PerPage::All,
    ]
}

/// Per-table configuration.
///
/// Decodes from JSON with every field optional:
///
/// ```
/// use hypertable::{FilterScope, PerPage, TableConfig};
///
/// let config = TableConfig::from_json(r#"{"per_page": 20, "filter_scope": "dataset"}"#).unwrap();
/// assert_eq!(config.per_page, PerPage::rows_or_all(20));
/// assert_eq!(config.filter_scope, FilterScope::Dataset);
/// assert_eq!(config.page_size_options.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Page size a new table starts with.
    pub per_page: PerPage,

    /// Choices offered by the page-size selector, in display order.
    pub page_size_options: Vec<PerPage>,

    /// Where search applies.
    pub filter_scope: FilterScope,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            per_page: PerPage::DEFAULT,
            page_size_options: default_page_size_options(),
            filter_scope: FilterScope::Page,
        }
    }
}

impl TableConfig {
    /// Create the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the initial page size.
    pub fn per_page(mut self, per_page: PerPage) -> Self {
        self.per_page = per_page;
        self
    }

    /// Replace the selectable page sizes.
    pub fn page_size_options(mut self, options: impl IntoIterator<Item = PerPage>) -> Self {
        self.page_size_options = options.into_iter().collect();
        self
    }

    /// Set where search applies.
    pub fn filter_scope(mut self, scope: FilterScope) -> Self {
        self.filter_scope = scope;
        self
    }

    /// Check the selector has options and offers the initial page size.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.page_size_options.is_empty() {
            return Err(TableError::EmptyPageSizeOptions);
        }
        if !self.page_size_options.contains(&self.per_page) {
            return Err(TableError::PageSizeNotOffered(self.per_page.to_i64()));
        }
        Ok(())
    }
}
