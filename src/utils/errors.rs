//! Error handling for Tongues
//!
//! This module defines the error types used throughout the library.
//! Translation failures never escape the public API as errors: they are
//! rendered as sentinel strings. The types here cover configuration,
//! catalog construction and logging setup.

use thiserror::Error;

/// Main error type for Tongues
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Logging initialization error: {0}")]
    Logging(String),
}

/// A scope that could not be turned into a message.
///
/// The `Display` form is the sentinel shown to users, e.g.
/// `[missing "en.greetings.hello" translation]`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[missing \"{key}\" translation]")]
pub struct MissingTranslation {
    /// Locale-qualified dotted key
    pub key: String,
}

impl MissingTranslation {
    /// Build the marker for `locale` followed by each of `parts`
    pub fn new<I, S>(locale: &str, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut key = locale.to_string();
        for part in parts {
            key.push('.');
            key.push_str(part.as_ref());
        }
        Self { key }
    }
}

/// Result type alias for Tongues operations
pub type Result<T> = std::result::Result<T, I18nError>;
