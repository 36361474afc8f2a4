//! Sender identity resolution.
//!
//! Identity is recomputed for every message and never stored: a display
//! name for the audit log and echo replies, plus a coarse identity class
//! that selects which persisted menu rows apply.

use crate::config::BotConfig;
use teloxide::types::User;

/// Coarse role bucket selecting the applicable menu rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityClass {
    Base,
    Privileged,
}

impl IdentityClass {
    /// Key used to scope persisted menu rows in the store
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityClass::Base => "base",
            IdentityClass::Privileged => "privileged",
        }
    }
}

/// Request-scoped identity of a message sender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub display_name: String,
    pub class: IdentityClass,
}

impl Identity {
    /// Derive the sender's identity from the Telegram user record.
    /// Display name falls back from username to first+last name to
    /// "Unknown"; the class is privileged only when the username is in
    /// the configured privileged set.
    pub fn from_user(user: Option<&User>, config: &BotConfig) -> Self {
        let display_name = user
            .map(display_name_of)
            .unwrap_or_else(|| "Unknown".to_string());

        let class = match user.and_then(|u| u.username.as_deref()) {
            Some(username) if config.privileged_users.contains(username) => {
                IdentityClass::Privileged
            }
            _ => IdentityClass::Base,
        };

        Self {
            display_name,
            class,
        }
    }
}

fn display_name_of(user: &User) -> String {
    if let Some(username) = &user.username {
        return username.clone();
    }

    let full_name = match &user.last_name {
        Some(last) => format!("{} {}", user.first_name, last),
        None => user.first_name.clone(),
    };
    let full_name = full_name.trim().to_string();

    if full_name.is_empty() {
        "Unknown".to_string()
    } else {
        full_name
    }
}
