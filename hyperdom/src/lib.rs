//! Element tree description and event bindings for hosts that render it.
//!
//! Nothing here draws anything. A host walks the [`Element`] tree, shows it
//! however it likes, and forwards user interactions through the
//! [`HandlerRegistry`] that was filled while the tree was built.

pub mod element;
pub mod event;
pub mod handlers;

pub use element::{collect_text, find_element, Content, Direction, Element, SelectOption};
pub use event::EventData;
pub use handlers::{Handler, HandlerRegistry};
