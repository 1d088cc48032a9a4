//! Stable sorting under the host's relational comparison.

use std::cmp::Ordering;

use crate::schema::{CellValue, Row};
use crate::state::SortDir;

/// Compare two cell values the way `<` / `>` compare them in the host.
///
/// Two texts compare lexicographically by UTF-16 code unit. Anything else is compared as
/// numbers, a missing value being NaN. When neither side is less than the
/// other, including any NaN, the values tie.
pub fn relational(a: Option<&CellValue>, b: Option<&CellValue>) -> Ordering {
    match (a, b) {
        (Some(CellValue::Text(x)), Some(CellValue::Text(y))) => x.encode_utf16().cmp(y.encode_utf16()),
        _ => {
            let x = a.map_or(f64::NAN, CellValue::to_number);
            let y = b.map_or(f64::NAN, CellValue::to_number);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
    }
}

/// Source indices of `rows` in display order for `key` and `dir`.
///
/// An empty key keeps the source order.
pub fn sorted_order(rows: &[Row], key: &str, dir: SortDir) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    if key.is_empty() {
        return order;
    }

    merge_sort_by(&mut order, |&a, &b| {
        let ord = relational(rows[a].get(key), rows[b].get(key));
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
    order
}

/// Stable bottom-up merge sort.
///
/// Mixed-type columns make `relational` intransitive, which `slice::sort_by`
/// is allowed to panic on. This never panics for any comparator.
fn merge_sort_by<T: Copy, F: FnMut(&T, &T) -> Ordering>(items: &mut [T], mut cmp: F) {
    let len = items.len();
    if len < 2 {
        return;
    }

    let mut buf = items.to_vec();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(&items[start..mid], &items[mid..end], &mut buf[start..end], &mut cmp);
            start = end;
        }
        items.copy_from_slice(&buf);
        width *= 2;
    }
}

fn merge<T: Copy, F: FnMut(&T, &T) -> Ordering>(left: &[T], right: &[T], out: &mut [T], cmp: &mut F) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left =
            i < left.len() && (j >= right.len() || cmp(&left[i], &right[j]) != Ordering::Greater);
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sort_matches_std_on_total_order() {
        let mut items = vec![5, 3, 9, 1, 1, 7, 2, 8, 0, 4, 6];
        let mut expected = items.clone();
        expected.sort();
        merge_sort_by(&mut items, |a, b| a.cmp(b));
        assert_eq!(items, expected);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        // (key, original position)
        let mut items = vec![(2, 0), (1, 1), (2, 2), (1, 3), (0, 4)];
        merge_sort_by(&mut items, |a, b| a.0.cmp(&b.0));
        assert_eq!(items, vec![(0, 4), (1, 1), (1, 3), (2, 0), (2, 2)]);
    }

    #[test]
    fn test_merge_sort_survives_inconsistent_comparator() {
        let mut items: Vec<u32> = (0..50).collect();
        merge_sort_by(&mut items, |a, b| if (a + b) % 3 == 0 { Ordering::Less } else { Ordering::Greater });
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_relational_mixed_values() {
        let text = |s: &str| CellValue::Text(s.into());
        let num = CellValue::Number;

        assert_eq!(relational(Some(&text("10")), Some(&text("9"))), Ordering::Less);
        assert_eq!(relational(Some(&text("10")), Some(&num(9.0))), Ordering::Greater);
        assert_eq!(relational(Some(&CellValue::Null), Some(&num(1.0))), Ordering::Less);
        assert_eq!(relational(None, Some(&num(1.0))), Ordering::Equal);
        assert_eq!(relational(Some(&text("abc")), Some(&num(1.0))), Ordering::Equal);
    }

    #[test]
    fn test_relational_text_by_utf16_units() {
        let text = |s: &str| CellValue::Text(s.into());
        // U+1F600 is the surrogate pair D83D DE00, below U+FF5E.
        assert_eq!(relational(Some(&text("\u{1F600}")), Some(&text("\u{FF5E}"))), Ordering::Less);
        assert_eq!(relational(Some(&text("b")), Some(&text("a\u{1F600}"))), Ordering::Greater);
    }
}
