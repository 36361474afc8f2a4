//! # Menubot
//!
//! A Telegram bot that routes messages through a database-backed dynamic
//! menu: each button label maps to an action (static info page, random
//! image, users report, recent logs), and every inbound message is
//! appended to an audit log.

pub mod bot;
pub mod config;
pub mod content;
pub mod db;
pub mod errors;
pub mod identity;
pub mod router;

/// Install both logging facades: `env_logger` for the `log` macros used at
/// bootstrap and in the store layer, and a `tracing` subscriber (filtered
/// by `RUST_LOG`) for the structured diagnostics in the bot handlers.
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env().try_init();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
