//! Error types for table construction and configuration.
//!
//! Actions and the view pipeline are total and never return these; errors
//! only come from building a table or parsing host-supplied input.

/// Error type for constructing or configuring a [`Table`](crate::Table).
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Two columns share the same key.
    #[error("Duplicate column key '{key}'")]
    DuplicateColumn { key: String },

    /// A column was declared with an empty key.
    #[error("Column '{title}' has an empty key")]
    EmptyColumnKey { title: String },

    /// A page size that is neither positive nor the show-all sentinel.
    #[error("Invalid page size {0}: expected a positive count or -1 for all rows")]
    InvalidPageSize(i64),

    /// The page-size selector would have nothing to offer.
    #[error("Page size options must not be empty")]
    EmptyPageSizeOptions,

    /// The initial page size is not one of the selectable options.
    #[error("Initial page size {0} is not among the page size options")]
    PageSizeNotOffered(i64),

    /// JSON input could not be decoded.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl TableError {
    /// Creates a new duplicate column error.
    pub fn duplicate_column(key: impl Into<String>) -> Self {
        Self::DuplicateColumn { key: key.into() }
    }

    /// Creates a new empty column key error.
    pub fn empty_column_key(title: impl Into<String>) -> Self {
        Self::EmptyColumnKey {
            title: title.into(),
        }
    }
}
