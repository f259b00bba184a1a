//! Library settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from configuration files and environment variables.

use std::path::Path;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Internationalization configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale used whenever no explicit locale is set
    pub default_locale: String,
    /// Explicit current locale
    pub locale: Option<String>,
    /// Fixed display offset such as `+02:00`; the host's local offset when unset
    pub utc_offset: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Emit JSON lines on stdout instead of the human format
    pub json: bool,
    /// Directory for a daily rolling log file
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from an optional `tongues` config file and `TONGUES__*` environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("tongues").required(false))
            .add_source(config::Environment::with_prefix("TONGUES").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings from an explicit configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::utils::errors::Result<()> {
        super::validation::validate_settings(self)
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            locale: None,
            utc_offset: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_path: None,
        }
    }
}
