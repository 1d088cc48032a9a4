//! Cell formatting by column type.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::schema::{CellValue, ColumnType};

/// Turn a raw cell value into display text for a column of `column_type`.
///
/// Numeric columns render missing, null or non-numeric values as an empty
/// string. Plain columns pass the value through.
///
/// ```
/// use hypertable::{CellValue, ColumnType, format_cell};
///
/// let v = CellValue::Number(1234.5);
/// assert_eq!(format_cell(Some(&v), ColumnType::Currency), "1,234.50");
/// assert_eq!(format_cell(None, ColumnType::Currency), "");
/// ```
pub fn format_cell(value: Option<&CellValue>, column_type: ColumnType) -> String {
    match column_type {
        ColumnType::Currency => numeric(value).map(currency).unwrap_or_default(),
        ColumnType::Percentage => numeric(value).map(percentage).unwrap_or_default(),
        ColumnType::Plain => value
            .map(|v| v.display_text().into_owned())
            .unwrap_or_default(),
    }
}

/// Two decimals with `,` between groups of three integer digits.
///
/// Halfway cases of the exact binary value round away from zero.
fn currency(n: f64) -> String {
    // -0 prints as "0.00".
    let n = if n == 0.0 { 0.0 } else { n };
    let fixed = match Decimal::from_f64_retain(n) {
        Some(exact) => {
            let mut rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        None => format!("{n:.2}"),
    };
    match fixed.split_once('.') {
        Some((int, frac)) => format!("{}.{frac}", group_thousands(int)),
        None => group_thousands(&fixed),
    }
}

/// en-locale percent: scaled by 100, no fraction digits, grouped.
fn percentage(n: f64) -> String {
    let scaled = (n * 100.0).round();
    if scaled.is_infinite() {
        let sign = if scaled < 0.0 { "-" } else { "" };
        return format!("{sign}∞%");
    }
    // -0 prints as "0%".
    let scaled = if scaled == 0.0 { 0.0 } else { scaled };
    format!("{}%", group_thousands(&format!("{scaled:.0}")))
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut out = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The finite number a numeric column should show, if any.
fn numeric(value: Option<&CellValue>) -> Option<f64> {
    let n = match value? {
        CellValue::Null => return None,
        CellValue::Number(n) => *n,
        CellValue::Text(s) => parse_float_prefix(s)?,
    };
    n.is_finite().then_some(n)
}

/// Parse the longest numeric prefix of `s`, skipping leading whitespace.
///
/// `"12.5kg"` is 12.5, `"abc"` is `None`.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
