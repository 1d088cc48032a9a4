//! Event payloads delivered by the host.

/// Standard event names used as the second half of a registry key.
pub const ON_CLICK: &str = "on_click";
pub const ON_CHANGE: &str = "on_change";

/// Event-specific data passed to handlers.
///
/// This allows handlers to access data from the event that triggered them,
/// such as the new text value for input change events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventData {
    /// No event data (clicks).
    #[default]
    None,
    /// Text input or select value changed.
    Change {
        /// The new value.
        text: String,
    },
}

impl EventData {
    /// Build a change event.
    pub fn change(text: impl Into<String>) -> Self {
        EventData::Change { text: text.into() }
    }

    /// Get the changed text from a Change event.
    pub fn text(&self) -> Option<&str> {
        match self {
            EventData::Change { text } => Some(text),
            EventData::None => None,
        }
    }
}
