//! Registry of event handlers keyed by `(element_id, event)`.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::event::EventData;

/// A handler closure invoked with the event payload.
///
/// The closure captures whatever it needs to act on at creation time.
pub type Handler = Arc<dyn Fn(&EventData) + Send + Sync>;

/// Registry for element event handlers.
///
/// Maps (element_id, event_type) to handler closures. Builders clear it before
/// filling it so handlers from previous renders don't persist.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event.
    ///
    /// # Arguments
    /// - `element_id`: The element's unique ID (from Element.id)
    /// - `event`: The event type (e.g., "on_click", "on_change")
    /// - `handler`: The handler closure
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Invoke the handler bound to `(element_id, event)`.
    ///
    /// Returns false when nothing is bound, which hosts treat as "ignored".
    pub fn dispatch(&self, element_id: &str, event: &str, data: &EventData) -> bool {
        // Clone out of the lock first; the handler may re-render into this registry.
        let Some(handler) = self.get(element_id, event) else {
            log::trace!("no handler for {element_id}/{event}");
            return false;
        };
        handler(data);
        true
    }

    /// Clear all handlers.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .map(|h| h.is_empty())
            .unwrap_or(true)
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &count)
            .finish()
    }
}
