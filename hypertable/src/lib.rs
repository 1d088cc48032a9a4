//! Tabular data view-model.
//!
//! A [`Table`] owns a column schema, a row dataset and the interactive view
//! state (page, page size, sort, search). Every user action produces a
//! [`ViewPatch`] that is merged onto the state; [`derive_view`] recomputes the
//! rows to present from scratch, and [`render::render`] turns that into a
//! [`hyperdom::Element`] tree for the host to draw.

pub mod actions;
pub mod config;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod render;
pub mod schema;
pub mod state;
pub mod store;

pub use actions::Action;
pub use config::{FilterScope, TableConfig};
pub use error::TableError;
pub use format::format_cell;
pub use pipeline::{DerivedView, HeaderCell, Pager, PresentedRow, Summary, derive_view};
pub use render::ElementIds;
pub use schema::{CellValue, Column, ColumnType, Row, columns_from_json, rows_from_json};
pub use state::{PerPage, SortDir, ViewPatch, ViewState};
pub use store::{Store, Table, TableId};

pub mod prelude {
    pub use crate::actions::{
        Action, handle_sort_change, replace_rows, set_filter, set_page_number, set_per_page,
    };
    pub use crate::config::{FilterScope, TableConfig};
    pub use crate::error::TableError;
    pub use crate::pipeline::{DerivedView, derive_view};
    pub use crate::schema::{CellValue, Column, ColumnType, Row};
    pub use crate::state::{PerPage, SortDir, ViewPatch, ViewState};
    pub use crate::store::Table;
}
