use hyperdom::{collect_text, find_element, Content, Direction, Element, SelectOption};

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_child_replaces_leaf_content() {
    let el = Element::text("old").child(Element::text("new"));
    assert_eq!(el.child_elements().len(), 1);
    assert_eq!(el.child_elements()[0].text_content(), Some("new"));
}

#[test]
fn test_children_extend_existing() {
    let el = Element::row()
        .child(Element::text("a"))
        .children(vec![Element::text("b"), Element::text("c")]);
    assert_eq!(el.direction, Direction::Row);
    assert_eq!(collect_text(&el), vec!["a", "b", "c"]);
}

#[test]
fn test_disabled_button_is_inert() {
    let el = Element::button(">>").disabled(true);
    assert!(el.disabled);
    assert!(!el.clickable);
    assert!(!el.focusable);
}

#[test]
fn test_text_input_placeholder() {
    let el = Element::text_input("abc").placeholder("Search");
    assert!(el.captures_input);
    assert_eq!(
        el.content,
        Content::TextInput {
            value: "abc".into(),
            placeholder: Some("Search".into()),
        }
    );
}

#[test]
fn test_placeholder_ignored_on_text() {
    let el = Element::text("x").placeholder("ignored");
    assert_eq!(el.text_content(), Some("x"));
}

#[test]
fn test_select_keeps_option_order() {
    let el = Element::select(
        "10",
        vec![SelectOption::new("5", "5"), SelectOption::new("-1", "All")],
    );
    match &el.content {
        Content::Select { value, options } => {
            assert_eq!(value, "10");
            assert_eq!(options[1].label, "All");
        }
        other => panic!("unexpected content {other:?}"),
    }
}

#[test]
fn test_data_roundtrip() {
    let el = Element::row().data("column", "name");
    assert_eq!(el.get_data("column").map(String::as_str), Some("name"));
    assert_eq!(el.get_data("missing"), None);
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[test]
fn test_find_element_nested() {
    let root = Element::col().id("root").child(
        Element::row()
            .id("inner")
            .child(Element::text("leaf").id("leaf")),
    );
    assert!(find_element(&root, "root").is_some());
    assert_eq!(
        find_element(&root, "leaf").and_then(Element::text_content),
        Some("leaf")
    );
    assert!(find_element(&root, "nope").is_none());
}
