/// One entry of a select element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value reported back in `on_change`.
    pub value: String,
    /// Label shown to the user.
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Single-line text field. `value` is what the host shows in it.
    TextInput {
        value: String,
        placeholder: Option<String>,
    },
    /// Drop-down with a fixed option list. `value` matches one option's value.
    Select {
        value: String,
        options: Vec<SelectOption>,
    },
}
