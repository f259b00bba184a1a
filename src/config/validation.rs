//! Configuration validation module
//!
//! This module provides validation functions for configuration
//! to ensure all settings are usable before a translator is built.

use chrono::FixedOffset;
use crate::utils::errors::{I18nError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_locale.is_empty() {
        return Err(I18nError::Config(
            "Default locale is required".to_string()
        ));
    }

    if matches!(config.locale.as_deref(), Some("")) {
        return Err(I18nError::Config(
            "Locale cannot be empty when set".to_string()
        ));
    }

    if let Some(offset) = &config.utc_offset {
        parse_utc_offset(offset)?;
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(I18nError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(I18nError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

/// Parse a `±HH:MM` or `±HHMM` offset
pub fn parse_utc_offset(offset: &str) -> Result<FixedOffset> {
    offset
        .parse::<FixedOffset>()
        .map_err(|e| I18nError::Config(format!("Invalid UTC offset '{}': {}", offset, e)))
}
