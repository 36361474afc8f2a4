//! Command routing core.
//!
//! Resolves an inbound text message to exactly one action by matching it
//! against the effective action table for the sender's identity class: the
//! fixed built-in table overlaid by the label→action rows persisted in the
//! menu store. Resolution is total — text matching nothing becomes an
//! `Echo` of the original message, never an error. Keyboard labels are
//! resolved from the same rows, with the built-in label set as the
//! fallback so the keyboard is never empty.

use crate::db::MenuEntry;
use std::collections::HashMap;
use tracing::warn;

/// Closed set of things the bot can do in response to a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Start,
    ShowInfo,
    ShowRandomImage,
    ShowUsers,
    ShowMenu,
    ShowLogs,
    /// No label or command matched; carries the original message text
    Echo(String),
}

impl Action {
    /// Parse a persisted action code (or slash command) into an action.
    /// Unknown codes return `None` so callers can surface a diagnostic.
    pub fn parse(code: &str) -> Option<Action> {
        match code {
            "/start" => Some(Action::Start),
            "/info" => Some(Action::ShowInfo),
            "/cats" => Some(Action::ShowRandomImage),
            "/users" => Some(Action::ShowUsers),
            "/menu" => Some(Action::ShowMenu),
            "/logs" => Some(Action::ShowLogs),
            _ => None,
        }
    }
}

/// Built-in label table, always available even without a database
pub const BUILTIN_MENU: &[(&str, Action)] = &[
    ("Start page", Action::Start),
    ("Menu", Action::ShowMenu),
];

/// Effective label→action table for one identity class
#[derive(Debug, Clone)]
pub struct ActionTable {
    entries: HashMap<String, Action>,
}

impl ActionTable {
    /// Table containing only the built-in labels
    pub fn builtin() -> Self {
        let entries = BUILTIN_MENU
            .iter()
            .map(|(label, action)| (label.to_string(), action.clone()))
            .collect();
        Self { entries }
    }

    /// Overlay persisted rows on top of the built-ins. Persisted rows win
    /// on label collision; among duplicate persisted labels the last row
    /// wins. Rows carrying an unknown action code are skipped with a
    /// diagnostic instead of being silently routed.
    pub fn with_rows(rows: &[MenuEntry]) -> Self {
        let mut table = Self::builtin();

        for row in rows {
            match Action::parse(&row.action) {
                Some(action) => {
                    table.entries.insert(row.label.clone(), action);
                }
                None => {
                    warn!(label = %row.label, action = %row.action, "Skipping menu row with unknown action code");
                }
            }
        }

        table
    }

    /// Resolve a message to exactly one action. Labels take priority, then
    /// raw command codes, and anything else echoes back to the sender.
    pub fn resolve(&self, text: &str) -> Action {
        if let Some(action) = self.entries.get(text) {
            return action.clone();
        }
        if let Some(action) = Action::parse(text) {
            return action;
        }
        Action::Echo(text.to_string())
    }
}

/// Ordered keyboard labels for one identity class. The store hands rows
/// back in ascending `order`; an empty row set falls back to the built-in
/// labels so the keyboard never renders empty.
pub fn keyboard_labels(rows: &[MenuEntry]) -> Vec<String> {
    if rows.is_empty() {
        BUILTIN_MENU
            .iter()
            .map(|(label, _)| label.to_string())
            .collect()
    } else {
        rows.iter().map(|row| row.label.clone()).collect()
    }
}
