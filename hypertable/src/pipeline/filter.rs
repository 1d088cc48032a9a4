//! Search matching.

use crate::schema::{CellValue, Column, Row};

/// Lowercased, trimmed search text.
pub fn normalize(filter: &str) -> String {
    filter.to_lowercase().trim().to_string()
}

/// Text a cell is searched by. Falsy values (missing, null, 0, NaN, "")
/// search as the empty string.
fn search_text(value: Option<&CellValue>) -> String {
    match value {
        Some(v) if !v.is_falsy() => normalize(&v.display_text()),
        _ => String::new(),
    }
}

/// Whether any filterable column of `row` contains `needle`.
///
/// `needle` must already be [`normalize`]d.
pub fn matches(row: &Row, columns: &[Column], needle: &str) -> bool {
    columns
        .iter()
        .filter(|column| column.filterable)
        .any(|column| search_text(row.get(&column.key)).contains(needle))
}

/// Keep the indices whose rows match `filter`. An empty filter keeps all.
pub fn retain_matching(order: &mut Vec<usize>, rows: &[Row], columns: &[Column], filter: &str) {
    if filter.is_empty() {
        return;
    }
    let needle = normalize(filter);
    order.retain(|&i| matches(&rows[i], columns, &needle));
}
