//! # Router Integration Tests
//!
//! End-to-end scenarios for the command-routing core: total resolution,
//! store-over-builtin override priority, and the built-in fallback used
//! when the menu store is unavailable.

use menubot::db::MenuEntry;
use menubot::router::{keyboard_labels, Action, ActionTable, BUILTIN_MENU};

fn entry(order: i32, label: &str, action: &str) -> MenuEntry {
    MenuEntry {
        order,
        label: label.to_string(),
        action: action.to_string(),
    }
}

/// Base-class store rows resolve labels to their actions; anything else echoes
#[test]
fn test_base_class_scenario() {
    let rows = vec![entry(1, "Cats", "/cats"), entry(2, "Info", "/info")];
    let table = ActionTable::with_rows(&rows);

    assert_eq!(table.resolve("Cats"), Action::ShowRandomImage);
    assert_eq!(table.resolve("Info"), Action::ShowInfo);
    assert_eq!(table.resolve("Dogs"), Action::Echo("Dogs".to_string()));
}

/// With the store unavailable the built-in table still answers, and the
/// keyboard is the built-in label set
#[test]
fn test_store_unavailable_scenario() {
    // Store failure degrades to an empty row set before the table is built
    let rows: Vec<MenuEntry> = Vec::new();
    let table = ActionTable::with_rows(&rows);

    assert_eq!(table.resolve("Menu"), Action::ShowMenu);
    assert_eq!(table.resolve("Start page"), Action::Start);

    let labels = keyboard_labels(&rows);
    let builtin: Vec<String> = BUILTIN_MENU
        .iter()
        .map(|(label, _)| label.to_string())
        .collect();
    assert_eq!(labels, builtin);
    assert!(!labels.is_empty());
}

/// Resolution is total: arbitrary Unicode input always yields exactly one action
#[test]
fn test_resolution_is_total() {
    let rows = vec![entry(1, "Cats", "/cats")];
    let table = ActionTable::with_rows(&rows);

    let inputs = [
        "plain text",
        "/unknown",
        "😺😺😺",
        "Меню ℹ",
        "  Cats  ",
        "\u{200b}",
        "a very long message that matches nothing in any table at all",
    ];
    for input in inputs {
        match table.resolve(input) {
            Action::Echo(text) => assert_eq!(text, input),
            other => panic!("expected echo for {input:?}, got {other:?}"),
        }
    }
}

/// A store row that reuses a built-in label wins the collision
#[test]
fn test_store_row_overrides_builtin_label() {
    let rows = vec![entry(1, "Start page", "/cats")];
    let table = ActionTable::with_rows(&rows);

    assert_eq!(table.resolve("Start page"), Action::ShowRandomImage);
}

/// Privileged and base classes get independent tables from their own rows
#[test]
fn test_per_class_tables_are_independent() {
    let base_rows = vec![entry(1, "Cats", "/cats")];
    let privileged_rows = vec![
        entry(1, "Cats", "/cats"),
        entry(2, "Users", "/users"),
        entry(3, "Logs", "/logs"),
    ];

    let base = ActionTable::with_rows(&base_rows);
    let privileged = ActionTable::with_rows(&privileged_rows);

    assert_eq!(base.resolve("Users"), Action::Echo("Users".to_string()));
    assert_eq!(privileged.resolve("Users"), Action::ShowUsers);
    assert_eq!(privileged.resolve("Logs"), Action::ShowLogs);
}

/// Keyboard labels keep the store's ascending order
#[test]
fn test_keyboard_order_follows_rows() {
    let rows = vec![
        entry(10, "Third", "/logs"),
        entry(2, "First", "/info"),
        entry(5, "Second", "/cats"),
    ];
    // Rows arrive already ordered by the store query; label order must be
    // preserved as given
    let ordered = vec![
        entry(2, "First", "/info"),
        entry(5, "Second", "/cats"),
        entry(10, "Third", "/logs"),
    ];

    assert_eq!(keyboard_labels(&ordered), vec!["First", "Second", "Third"]);
    assert_eq!(keyboard_labels(&rows), vec!["Third", "First", "Second"]);
}
