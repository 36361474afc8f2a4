//! Bot module for handling Telegram interactions
//!
//! This module is split into two submodules:
//! - `message_handler`: per-message routing pipeline and action executors
//! - `ui_builder`: reply keyboards and report formatting

pub mod message_handler;
pub mod ui_builder;

// Re-export main handler function for use in main.rs
pub use message_handler::message_handler;

// Re-export formatting helpers used by integration tests
pub use ui_builder::{format_echo, format_logs, format_users, menu_keyboard, PASSWORD_MASK};
