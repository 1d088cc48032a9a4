use std::collections::HashMap;

use super::{Content, SelectOption};

/// Main axis for laying out children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    // Identity. Empty for elements nobody needs to address.
    pub id: String,

    // Content
    pub content: Content,

    // Layout
    pub direction: Direction,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,
    /// When true, this element captures keyboard input (for text fields).
    pub captures_input: bool,

    /// Whether this element is disabled. Disabled elements don't receive input.
    pub disabled: bool,

    // Custom data storage (class names, column keys, etc.)
    pub data: HashMap<String, String>,
}

impl Element {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            direction: Direction::Row,
            ..Default::default()
        }
    }

    /// Create a clickable, focusable text element.
    pub fn button(label: impl Into<String>) -> Self {
        Self {
            content: Content::Text(label.into()),
            focusable: true,
            clickable: true,
            ..Default::default()
        }
    }

    /// Create a text input element.
    pub fn text_input(value: impl Into<String>) -> Self {
        Self {
            content: Content::TextInput {
                value: value.into(),
                placeholder: None,
            },
            focusable: true,
            captures_input: true,
            ..Default::default()
        }
    }

    /// Create a select element showing `value` as the current choice.
    pub fn select(value: impl Into<String>, options: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            content: Content::Select {
                value: value.into(),
                options: options.into_iter().collect(),
            },
            focusable: true,
            clickable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // State
    /// Disabling an element also drops its focusable and clickable flags.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        if disabled {
            self.focusable = false;
            self.clickable = false;
        }
        self
    }

    // Text input methods

    /// Set the placeholder text for a text input.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::TextInput { placeholder, .. } = &mut self.content {
            *placeholder = Some(text.into());
        }
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    /// Text content, if this is a text node.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Child elements, empty for leaf content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }
}
