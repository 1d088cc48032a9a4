//! Per-table state ownership.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use hyperdom::{Element, HandlerRegistry};

use crate::actions::Action;
use crate::config::TableConfig;
use crate::error::TableError;
use crate::pipeline::{DerivedView, derive_view};
use crate::render::{self, ElementIds};
use crate::schema::{Column, Row, validate_columns};
use crate::state::ViewState;

// =============================================================================
// Store
// =============================================================================

/// Shared state cell with a dirty flag.
///
/// `Store<T>` uses `Arc<RwLock<T>>` internally, making it cheap to clone into
/// event handlers. The dirty flag is raised on every write and tells the
/// host a recompute is due.
#[derive(Debug)]
pub struct Store<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T> Store<T> {
    /// Create a new store with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Borrow the current value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Update the value using a closure
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard);
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Return the dirty flag and clear it.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

// =============================================================================
// TableId
// =============================================================================

/// Unique identifier for a Table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

// =============================================================================
// Table
// =============================================================================

/// One table instance: its view state, config and the actions wired to it.
///
/// Cloning a `Table` gives another handle to the same state.
///
/// # Example
///
/// ```
/// use hypertable::{Action, Column, Row, Table};
///
/// let table = Table::new(
///     vec![Column::new("name", "Name"), Column::new("balance", "Balance").currency()],
///     vec![Row::new().set("name", "Ada").set("balance", 1234.5)],
/// )
/// .unwrap();
///
/// table.dispatch(Action::SortBy("name".into()));
/// let view = table.view();
/// assert_eq!(view.rows[0].cells, vec!["Ada".to_string(), "1,234.50".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    id: TableId,
    state: Store<ViewState>,
    config: Arc<TableConfig>,
}

impl Table {
    /// Create a table with the default config.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Result<Self, TableError> {
        Self::with_config(columns, rows, TableConfig::default())
    }

    /// Create a table with `config`.
    pub fn with_config(
        columns: Vec<Column>,
        rows: Vec<Row>,
        config: TableConfig,
    ) -> Result<Self, TableError> {
        validate_columns(&columns)?;
        config.validate()?;

        log::debug!(
            "Table::new columns={} rows={} per_page={} scope={:?}",
            columns.len(),
            rows.len(),
            config.per_page,
            config.filter_scope
        );

        let state = ViewState::new(columns, rows)
            .with_per_page(config.per_page)
            .with_filter_scope(config.filter_scope);

        Ok(Self {
            id: TableId::new(),
            state: Store::new(state),
            config: Arc::new(config),
        })
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    /// IDs of the interactive elements in this table's rendered tree.
    pub fn ids(&self) -> ElementIds {
        ElementIds::new(self.id)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.state.get()
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Reduce `action` against the current state and replace the state with
    /// the result. Marks the table dirty.
    pub fn dispatch(&self, action: Action) {
        log::debug!("Table::dispatch {}", action.name());
        self.state.update(|state| {
            let patch = action.reduce(state);
            *state = state.apply(patch);
        });
    }

    /// The derived view for the current state.
    pub fn view(&self) -> DerivedView {
        self.state.with(derive_view)
    }

    /// Whether an action ran since the last [`take_dirty`](Self::take_dirty).
    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    /// Return and clear the dirty flag. Hosts call this to decide whether to
    /// re-render.
    pub fn take_dirty(&self) -> bool {
        self.state.take_dirty()
    }

    /// Build the element tree for the current state and bind its handlers in
    /// `registry`, which is cleared first.
    pub fn render(&self, registry: &HandlerRegistry) -> Element {
        registry.clear();
        let state = self.state();
        let view = derive_view(&state);
        render::render(self, &state, &view, registry)
    }
}
