//! Column schema and dynamic row values.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::TableError;

// =============================================================================
// ColumnType
// =============================================================================

/// How a column's raw values are turned into display text.
///
/// Unknown type names in JSON decode as [`ColumnType::Plain`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Currency,
    Percentage,
    #[default]
    #[serde(other)]
    Plain,
}

// =============================================================================
// Column
// =============================================================================

fn default_filterable() -> bool {
    true
}

/// A table column definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Key of the row field this column shows. Unique within a table.
    pub key: String,
    /// Header text.
    pub title: String,
    /// Formatting applied to cells.
    #[serde(rename = "type", default)]
    pub column_type: ColumnType,
    /// Whether search looks at this column.
    #[serde(default = "default_filterable")]
    pub filterable: bool,
}

impl Column {
    /// Create a new plain, filterable column.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            column_type: ColumnType::Plain,
            filterable: true,
        }
    }

    /// Set the column type.
    pub fn of_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = column_type;
        self
    }

    /// Format cells as currency.
    pub fn currency(self) -> Self {
        self.of_type(ColumnType::Currency)
    }

    /// Format cells as percentages.
    pub fn percentage(self) -> Self {
        self.of_type(ColumnType::Percentage)
    }

    /// Set whether search considers this column.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }
}

/// Check that every column has a non-empty key and no key repeats.
pub fn validate_columns(columns: &[Column]) -> Result<(), TableError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if column.key.is_empty() {
            return Err(TableError::empty_column_key(&column.title));
        }
        if !seen.insert(column.key.as_str()) {
            return Err(TableError::duplicate_column(&column.key));
        }
    }
    Ok(())
}

/// Decode a JSON array of column definitions.
pub fn columns_from_json(json: &str) -> Result<Vec<Column>, TableError> {
    let columns: Vec<Column> = serde_json::from_str(json)?;
    validate_columns(&columns)?;
    Ok(columns)
}

// =============================================================================
// CellValue
// =============================================================================

/// A raw cell value.
///
/// A key that is absent from a [`Row`] is the "missing" value and shows up as
/// `None` on lookup; `Null` is an explicit null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Host number coercion: null is 0, text is parsed as a numeric literal.
    ///
    /// Returns NaN for text that is not a number.
    pub fn to_number(&self) -> f64 {
        match self {
            CellValue::Null => 0.0,
            CellValue::Number(n) => *n,
            CellValue::Text(s) => parse_numeric_literal(s),
        }
    }

    /// Text shown for the value when no formatting applies.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed(""),
            CellValue::Number(n) => Cow::Owned(number_to_text(*n)),
            CellValue::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Null, empty text, zero and NaN.
    pub fn is_falsy(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Number(n) => *n == 0.0 || n.is_nan(),
            CellValue::Text(s) => s.is_empty(),
        }
    }
}

/// Render a number the way the host coerces numbers to text.
pub(crate) fn number_to_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        // Covers -0.
        "0".to_string()
    } else if n.abs() < 1e-6 || n.abs() >= 1e21 {
        // Exponent form carries an explicit sign: 1e+21, 1.5e-7.
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else {
        n.to_string()
    }
}

/// Parse a whole string as a numeric literal. Surrounding whitespace is
/// ignored and blank text is 0.
fn parse_numeric_literal(s: &str) -> f64 {
    let s = s.trim();
    match s {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust accepts "inf" and "nan" spellings that are not numbers here.
        _ if s.chars().any(|c| c.is_alphabetic() && c != 'e' && c != 'E') => f64::NAN,
        _ => s.parse().unwrap_or(f64::NAN),
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Number(f64::from(v))
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Number(v as f64)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Number(f64::from(v))
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CellValue::Null, Into::into)
    }
}

// =============================================================================
// Row
// =============================================================================

/// A record mapping column keys to raw values.
///
/// Rows carry no identity of their own; their position in the dataset is the
/// source order.
///
/// # Example
///
/// ```
/// use hypertable::{CellValue, Row};
///
/// let row = Row::new().set("name", "Ada").set("balance", 1234.5);
/// assert_eq!(row.get("name"), Some(&CellValue::Text("Ada".into())));
/// assert_eq!(row.get("age"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: HashMap<String, CellValue>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value, returning the row for chaining.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a field value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Returns the value for `key`, or `None` when the field is missing.
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.get(key)
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Decode a JSON array of row objects.
pub fn rows_from_json(json: &str) -> Result<Vec<Row>, TableError> {
    Ok(serde_json::from_str(json)?)
}
