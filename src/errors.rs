//! # Error Types Module
//!
//! Domain error taxonomy for the bot's external collaborators: the menu
//! store and the static content sources. Dependency failures are caught at
//! the action-executor boundary and converted into user-visible fallback
//! messages; these types carry the operator-side detail.

/// Errors raised by the menu store (Postgres) collaborators
#[derive(Debug, Clone)]
pub enum StoreError {
    /// Connection or query failure
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

/// Errors raised by the static content sources (info file, image directory)
#[derive(Debug, Clone)]
pub enum ContentError {
    /// Missing file or unreadable directory
    NotFound(String),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::NotFound(msg) => write!(f, "Content not found: {msg}"),
        }
    }
}

impl std::error::Error for ContentError {}

impl From<std::io::Error> for ContentError {
    fn from(err: std::io::Error) -> Self {
        ContentError::NotFound(err.to_string())
    }
}
