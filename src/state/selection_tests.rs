//! Unit tests for the selection tracker.

use super::*;

fn record(id: &str) -> UserRecord {
    UserRecord {
        id: UserId::new(id).expect("test id"),
        name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        role: "member".to_string(),
    }
}

fn id(raw: &str) -> UserId {
    UserId::new(raw).expect("test id")
}

#[test]
fn new_selection_is_empty() {
    let selection = SelectionSet::new();
    assert!(selection.is_empty());
    assert_eq!(selection.len(), 0);
}

#[test]
fn toggle_checked_adds_id() {
    let mut selection = SelectionSet::new();
    selection.toggle(id("1"), true);
    assert!(selection.contains(&id("1")));
    assert_eq!(selection.len(), 1);
}

#[test]
fn toggle_unchecked_removes_id() {
    let mut selection = SelectionSet::new();
    selection.toggle(id("1"), true);
    selection.toggle(id("1"), false);
    assert!(!selection.contains(&id("1")));
    assert!(selection.is_empty());
}

#[test]
fn toggle_is_idempotent() {
    let mut selection = SelectionSet::new();
    selection.toggle(id("1"), true);
    selection.toggle(id("1"), true);
    assert_eq!(selection.len(), 1, "Re-checking a checked row is a no-op");

    selection.toggle(id("2"), false);
    assert_eq!(selection.len(), 1, "Un-checking an unchecked row is a no-op");
}

#[test]
fn select_page_captures_exactly_visible_ids() {
    let page = vec![record("1"), record("2"), record("3")];
    let mut selection = SelectionSet::new();
    selection.select_page(&page);

    assert_eq!(selection.len(), 3, "No padding beyond the visible rows");
    for r in &page {
        assert!(selection.contains(&r.id));
    }
}

#[test]
fn select_page_replaces_previous_selection() {
    let mut selection = SelectionSet::new();
    selection.toggle(id("99"), true);

    let page = vec![record("1"), record("2")];
    selection.select_page(&page);

    assert!(!selection.contains(&id("99")));
    assert_eq!(selection.len(), 2);
}

#[test]
fn is_all_selected_means_set_equality_with_page() {
    let page = vec![record("1"), record("2")];
    let mut selection = SelectionSet::new();

    selection.toggle(id("1"), true);
    assert!(!selection.is_all_selected(&page));

    selection.toggle(id("2"), true);
    assert!(selection.is_all_selected(&page));
}

#[test]
fn is_all_selected_false_when_selection_holds_foreign_id() {
    let page = vec![record("1"), record("2")];
    let mut selection = SelectionSet::new();
    selection.toggle(id("1"), true);
    selection.toggle(id("7"), true);

    assert!(
        !selection.is_all_selected(&page),
        "Same size but different ids must not count as all-selected"
    );
}

#[test]
fn is_all_selected_false_for_empty_page() {
    let selection = SelectionSet::new();
    assert!(!selection.is_all_selected(&[]));
}

#[test]
fn partial_last_page_select_all_is_all_selected() {
    // 2 real rows on the last page: selecting the page selects 2 ids and
    // still reports all-selected.
    let page = vec![record("11"), record("12")];
    let mut selection = SelectionSet::new();
    selection.select_page(&page);

    assert_eq!(selection.len(), 2);
    assert!(selection.is_all_selected(&page));
}

#[test]
fn clear_empties_selection() {
    let mut selection = SelectionSet::new();
    selection.select_page(&[record("1"), record("2")]);
    selection.clear();
    assert!(selection.is_empty());
}
