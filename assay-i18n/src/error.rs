//! Error types for locale configuration

use thiserror::Error;

/// Errors returned by locale configuration calls.
///
/// Message rendering never produces these; a broken catalog degrades to a
/// sentinel string instead.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The locale code is well formed but has no catalog in the store
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// The locale code is empty or contains characters outside `[A-Za-z0-9_-]`
    #[error("Invalid locale: {0:?}")]
    InvalidLocale(String),

    /// A catalog document had the wrong shape
    #[error("Failed to parse message catalog: {0}")]
    ParseError(String),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}
