//! Error types for focustrack.

use thiserror::Error;

/// Errors that can occur in focustrack.
#[derive(Error, Debug)]
pub enum FocusError {
    /// Configuration or path resolution failed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The SQLite key-value layer failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored or user-supplied data could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A user action was rejected by the timer.
    #[error("{0}")]
    InvalidAction(String),

    /// The terminal UI could not be driven.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl FocusError {
    /// Shorthand for an [`FocusError::InvalidAction`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidAction(msg.into())
    }

    /// Whether this error is a rejected user action rather than a failure.
    #[must_use]
    pub const fn is_user_action(&self) -> bool {
        matches!(self, Self::InvalidAction(_))
    }
}

impl From<serde_json::Error> for FocusError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<rusqlite::Error> for FocusError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}
