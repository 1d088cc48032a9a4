use hypertable::prelude::*;
use hypertable::HeaderCell;

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name"),
        Column::new("group", "Group"),
        Column::new("balance", "Balance").currency(),
    ]
}

/// `person {i}`, group `i % 3`, balance `i * 1000.5`.
fn rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| {
            Row::new()
                .set("name", format!("person {i}"))
                .set("group", (i % 3) as i64)
                .set("balance", i as f64 * 1000.5)
        })
        .collect()
}

fn state(n: usize) -> ViewState {
    ViewState::new(columns(), rows(n))
}

fn indices(view: &DerivedView) -> Vec<usize> {
    view.rows.iter().map(|r| r.index).collect()
}

fn search(text: &str) -> ViewPatch {
    ViewPatch::default().filter(text)
}

fn sorted(state: ViewState, key: &str) -> ViewState {
    let patch = handle_sort_change(&state, key);
    state.apply(patch)
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_default_first_page() {
    let view = derive_view(&state(25));
    assert_eq!(view.page_count, 3);
    assert_eq!(view.window_start, 0);
    assert_eq!(view.window_end, 10);
    assert_eq!(indices(&view), (0..10).collect::<Vec<_>>());
}

#[test]
fn test_last_page_is_partial() {
    let view = derive_view(&state(25).apply(set_page_number(3)));
    assert_eq!(view.page_count, 3);
    assert_eq!(view.window_start, 20);
    assert_eq!(view.window_end, 30);
    assert_eq!(indices(&view), vec![20, 21, 22, 23, 24]);
}

#[test]
fn test_page_count_rounds_down() {
    // 24 / 10 rounds to 2; rows 20..24 are past the last page.
    let view = derive_view(&state(24));
    assert_eq!(view.page_count, 2);
    let view = derive_view(&state(24).apply(set_page_number(3)));
    assert_eq!(indices(&view), vec![20, 21, 22, 23]);
}

#[test]
fn test_show_all_skips_windowing() {
    let s = state(25).apply(ViewPatch::default().per_page(PerPage::All));
    let view = derive_view(&s);
    assert_eq!(view.page_count, 1);
    assert_eq!(view.window_start, 0);
    assert_eq!(view.window_end, 25);
    assert_eq!(view.rows.len(), 25);
}

#[test]
fn test_out_of_range_page_is_empty() {
    let view = derive_view(&state(25).apply(set_page_number(9)));
    assert!(view.rows.is_empty());
    assert_eq!(view.summary.from, 81);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_sort_is_stable() {
    let s = sorted(state(9), "group").apply(ViewPatch::default().per_page(PerPage::All));
    let view = derive_view(&s);
    assert_eq!(indices(&view), vec![0, 3, 6, 1, 4, 7, 2, 5, 8]);
}

#[test]
fn test_desc_keeps_tie_order() {
    let s = sorted(sorted(state(9), "group"), "group")
        .apply(ViewPatch::default().per_page(PerPage::All));
    assert_eq!(s.sort_dir, SortDir::Desc);
    let view = derive_view(&s);
    assert_eq!(indices(&view), vec![2, 5, 8, 1, 4, 7, 0, 3, 6]);
}

#[test]
fn test_toggle_twice_restores_order() {
    let asc = sorted(state(25), "group");
    let twice = sorted(sorted(asc.clone(), "group"), "group");
    assert_eq!(twice.sort_dir, SortDir::Asc);
    assert_eq!(derive_view(&asc), derive_view(&twice));
}

#[test]
fn test_sort_before_paging() {
    // Descending by balance: the first page holds the largest balances.
    let s = sorted(sorted(state(25), "balance"), "balance");
    let view = derive_view(&s);
    assert_eq!(indices(&view), (15..25).rev().collect::<Vec<_>>());
}

#[test]
fn test_text_sorts_lexicographically() {
    let s = sorted(state(12), "name").apply(ViewPatch::default().per_page(PerPage::All));
    let view = derive_view(&s);
    // "person 10" < "person 2"
    assert_eq!(indices(&view), vec![0, 1, 10, 11, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_mixed_values_do_not_panic() {
    let mixed = vec![
        Row::new().set("v", "10"),
        Row::new().set("v", 9),
        Row::new().set("v", CellValue::Null),
        Row::new(),
        Row::new().set("v", "abc"),
        Row::new().set("v", "9"),
        Row::new().set("v", -1.5),
    ];
    let s = ViewState::new(vec![Column::new("v", "V")], mixed);
    let s = sorted(s, "v");
    let view = derive_view(&s);
    assert_eq!(view.rows.len(), 7);
    let mut seen = indices(&view);
    seen.sort();
    assert_eq!(seen, (0..7).collect::<Vec<_>>());
}

#[test]
fn test_unknown_sort_key_keeps_order() {
    let view = derive_view(&sorted(state(10), "missing"));
    assert_eq!(indices(&view), (0..10).collect::<Vec<_>>());
}

#[test]
fn test_source_rows_not_reordered() {
    let s = sorted(sorted(state(10), "balance"), "balance");
    let _ = derive_view(&s);
    assert_eq!(s.rows[0].get("name"), Some(&CellValue::Text("person 0".into())));
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_filter_only_searches_current_page() {
    // "person 2" also matches rows 20..=24, which are on page 3.
    let s = state(25).apply(search("person 2"));
    let view = derive_view(&s);
    assert_eq!(indices(&view), vec![2]);

    let window: Vec<usize> = (view.window_start..view.window_end).collect();
    assert!(indices(&view).iter().all(|i| window.contains(i)));
}

#[test]
fn test_filter_on_later_page() {
    let s = state(25).apply(search("person 2").page_number(3));
    let view = derive_view(&s);
    assert_eq!(indices(&view), vec![20, 21, 22, 23, 24]);
}

#[test]
fn test_filter_dataset_scope() {
    let s = state(25)
        .with_filter_scope(FilterScope::Dataset)
        .apply(search("person 2"));
    let view = derive_view(&s);
    assert_eq!(indices(&view), vec![2, 20, 21, 22, 23, 24]);
    // round(6 / 10)
    assert_eq!(view.page_count, 1);
}

#[test]
fn test_filter_case_and_whitespace() {
    let s = state(10).apply(search("  PERSON 3 "));
    assert_eq!(indices(&derive_view(&s)), vec![3]);
}

#[test]
fn test_blank_filter_keeps_page() {
    let s = state(10).apply(search("   "));
    assert_eq!(derive_view(&s).rows.len(), 10);
}

#[test]
fn test_filter_skips_unfilterable_columns() {
    let columns = vec![
        Column::new("name", "Name"),
        Column::new("secret", "Secret").filterable(false),
    ];
    let rows = vec![Row::new().set("name", "ada").set("secret", "needle")];
    let s = ViewState::new(columns.clone(), rows.clone());

    let view = derive_view(&s.apply(search("needle")));
    assert!(view.rows.is_empty());

    // Still rendered.
    let view = derive_view(&ViewState::new(columns, rows));
    assert_eq!(view.rows[0].cells, vec!["ada".to_string(), "needle".to_string()]);
}

#[test]
fn test_filter_ignores_zero_values() {
    let rows = vec![Row::new().set("v", 0), Row::new().set("v", 10), Row::new().set("v", CellValue::Null)];
    let s = ViewState::new(vec![Column::new("v", "V")], rows).apply(search("0"));
    assert_eq!(indices(&derive_view(&s)), vec![1]);
}

#[test]
fn test_filter_matches_raw_numbers() {
    // Search looks at the raw value, not the formatted "1,000.50".
    let s = state(5).apply(search("1000.5"));
    assert_eq!(indices(&derive_view(&s)), vec![1]);
}

// ============================================================================
// Bookkeeping
// ============================================================================

#[test]
fn test_header_marks_sort_column() {
    let view = derive_view(&sorted(state(3), "group"));
    assert_eq!(
        view.header[1],
        HeaderCell {
            key: "group".into(),
            title: "Group".into(),
            sort: Some(SortDir::Asc),
        }
    );
    assert_eq!(view.header[1].label(), "Group ↑");
    assert_eq!(view.header[0].sort, None);
    assert_eq!(view.header[0].label(), "Name");

    let view = derive_view(&sorted(sorted(state(3), "group"), "group"));
    assert_eq!(view.header[1].label(), "Group ↓");
}

#[test]
fn test_summary_repeats_presented_count() {
    let view = derive_view(&state(25).apply(set_page_number(2)));
    assert_eq!(view.summary.to_string(), "Showing 11 to 10 of 10");

    let view = derive_view(&state(25).apply(search("person 2")));
    assert_eq!(view.summary.to_string(), "Showing 1 to 1 of 1 (filtered from 25)");
}

#[test]
fn test_pager_states() {
    let first = derive_view(&state(25)).pager;
    assert!(first.back_disabled);
    assert!(!first.forward_disabled);
    assert_eq!(first.next_page(), 2);
    assert_eq!(first.last_page(), 3);

    let middle = derive_view(&state(25).apply(set_page_number(2))).pager;
    assert!(!middle.back_disabled);
    assert!(!middle.forward_disabled);
    assert_eq!(middle.prev_page(), 1);

    let last = derive_view(&state(25).apply(set_page_number(3))).pager;
    assert!(last.forward_disabled);
}

#[test]
fn test_pager_with_no_full_page() {
    // round(3 / 10) = 0 pages. Page 1 is not page 0, so next/last stay live
    // and last still targets page 1.
    let pager = derive_view(&state(3)).pager;
    assert_eq!(pager.page_count, 0);
    assert!(pager.back_disabled);
    assert!(!pager.forward_disabled);
    assert_eq!(pager.last_page(), 1);
}

#[test]
fn test_pager_past_last_page() {
    let pager = derive_view(&state(25).apply(set_page_number(5))).pager;
    assert_eq!(pager.page_count, 3);
    assert!(!pager.forward_disabled);
}

#[test]
fn test_cells_are_formatted() {
    let view = derive_view(&state(3));
    assert_eq!(
        view.rows[2].cells,
        vec!["person 2".to_string(), "2".to_string(), "2,001.00".to_string()]
    );
}

#[test]
fn test_derive_view_is_idempotent() {
    let s = sorted(state(25), "name").apply(search("1").page_number(2));
    assert_eq!(derive_view(&s), derive_view(&s));
}

#[test]
fn test_empty_dataset() {
    let view = derive_view(&ViewState::new(columns(), Vec::new()));
    assert!(view.rows.is_empty());
    assert_eq!(view.page_count, 0);
    assert_eq!(view.summary.to_string(), "Showing 1 to 0 of 0");
}
