//! Element tree for a table and the handlers bound to it.
//!
//! Layout:
//!
//! ```text
//! col
//! ├── row            per-page select, search input
//! ├── col            table
//! │   ├── row        header cells (click to sort)
//! │   └── col        body rows
//! └── row            summary, pager: << < [n] > >>
//! ```

use std::sync::Arc;

use hyperdom::event::{ON_CHANGE, ON_CLICK};
use hyperdom::{Element, EventData, HandlerRegistry, SelectOption};

use crate::actions::Action;
use crate::pipeline::{DerivedView, HeaderCell, PresentedRow};
use crate::state::{PerPage, ViewState};
use crate::store::{Table, TableId};

// =============================================================================
// Element IDs
// =============================================================================

/// IDs of the addressable elements of one table's tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementIds {
    table: TableId,
}

impl ElementIds {
    pub fn new(table: TableId) -> Self {
        Self { table }
    }

    fn part(&self, part: &str) -> String {
        format!("{}-{part}", self.table)
    }

    pub fn root(&self) -> String {
        self.table.to_string()
    }

    pub fn per_page(&self) -> String {
        self.part("per-page")
    }

    pub fn search(&self) -> String {
        self.part("search")
    }

    pub fn header(&self, key: &str) -> String {
        self.part(&format!("th-{key}"))
    }

    pub fn body(&self) -> String {
        self.part("tbody")
    }

    pub fn summary(&self) -> String {
        self.part("summary")
    }

    pub fn first(&self) -> String {
        self.part("first")
    }

    pub fn prev(&self) -> String {
        self.part("prev")
    }

    pub fn page(&self) -> String {
        self.part("page")
    }

    pub fn next(&self) -> String {
        self.part("next")
    }

    pub fn last(&self) -> String {
        self.part("last")
    }
}

// =============================================================================
// Render
// =============================================================================

/// Build the tree for `view` and register handlers dispatching into `table`.
pub fn render(
    table: &Table,
    state: &ViewState,
    view: &DerivedView,
    registry: &HandlerRegistry,
) -> Element {
    let ids = table.ids();
    log::debug!(
        "render {} rows={} page={}/{}",
        ids.root(),
        view.rows.len(),
        view.pager.page_number,
        view.page_count
    );

    Element::col().id(ids.root()).children(vec![
        toolbar(table, state, &ids, registry),
        grid(table, view, &ids, registry),
        footer(table, view, &ids, registry),
    ])
}

fn toolbar(table: &Table, state: &ViewState, ids: &ElementIds, registry: &HandlerRegistry) -> Element {
    let options = table
        .config()
        .page_size_options
        .iter()
        .map(|option| SelectOption::new(option.to_string(), option.label()));

    let per_page_id = ids.per_page();
    let select = Element::select(state.per_page.to_string(), options).id(&per_page_id);
    bind(registry, table, &per_page_id, ON_CHANGE, |data| {
        let text = data.text()?;
        match text.trim().parse::<i64>().map(PerPage::try_from) {
            Ok(Ok(per_page)) => Some(Action::SetPerPage(per_page)),
            Ok(Err(err)) => {
                log::warn!("ignoring page size change: {err}");
                None
            }
            Err(err) => {
                log::warn!("ignoring page size change {text:?}: {err}");
                None
            }
        }
    });

    let search_id = ids.search();
    let search = Element::text_input(state.filter.clone())
        .id(&search_id)
        .placeholder("Search");
    bind(registry, table, &search_id, ON_CHANGE, |data| {
        data.text().map(|text| Action::SetFilter(text.to_string()))
    });

    Element::row().children(vec![
        Element::row().children(vec![Element::text("Per page: "), select]),
        Element::row().children(vec![Element::text("Search: "), search]),
    ])
}

fn grid(table: &Table, view: &DerivedView, ids: &ElementIds, registry: &HandlerRegistry) -> Element {
    let header = Element::row().children(
        view.header
            .iter()
            .map(|cell| header_cell(table, cell, ids, registry)),
    );

    let body = Element::col()
        .id(ids.body())
        .children(view.rows.iter().map(body_row));

    Element::col().child(header).child(body)
}

fn header_cell(table: &Table, cell: &HeaderCell, ids: &ElementIds, registry: &HandlerRegistry) -> Element {
    let id = ids.header(&cell.key);
    let key = cell.key.clone();
    bind(registry, table, &id, ON_CLICK, move |_| {
        Some(Action::SortBy(key.clone()))
    });

    Element::button(cell.label())
        .id(id)
        .data("column", &cell.key)
}

fn body_row(row: &PresentedRow) -> Element {
    Element::row()
        .data("index", row.index.to_string())
        .children(row.cells.iter().map(Element::text))
}

fn footer(table: &Table, view: &DerivedView, ids: &ElementIds, registry: &HandlerRegistry) -> Element {
    let pager = view.pager;
    let summary = Element::text(view.summary.to_string()).id(ids.summary());

    Element::row().children(vec![
        summary,
        Element::row().children(vec![
            pager_button(table, registry, ids.first(), "<<", pager.back_disabled, 1),
            pager_button(table, registry, ids.prev(), "<", pager.back_disabled, pager.prev_page()),
            Element::button(pager.page_number.to_string())
                .id(ids.page())
                .disabled(true),
            pager_button(table, registry, ids.next(), ">", pager.forward_disabled, pager.next_page()),
            pager_button(table, registry, ids.last(), ">>", pager.forward_disabled, pager.last_page()),
        ]),
    ])
}

fn pager_button(
    table: &Table,
    registry: &HandlerRegistry,
    id: String,
    label: &str,
    disabled: bool,
    target: usize,
) -> Element {
    if !disabled {
        bind(registry, table, &id, ON_CLICK, move |_| {
            Some(Action::SetPageNumber(target))
        });
    }
    Element::button(label).id(id).disabled(disabled)
}

/// Register a handler that turns an event into an optional action and
/// dispatches it into `table`.
fn bind<F>(registry: &HandlerRegistry, table: &Table, element_id: &str, event: &str, to_action: F)
where
    F: Fn(&EventData) -> Option<Action> + Send + Sync + 'static,
{
    let table = table.clone();
    registry.register(
        element_id,
        event,
        Arc::new(move |data: &EventData| {
            if let Some(action) = to_action(data) {
                table.dispatch(action);
            }
        }),
    );
}
