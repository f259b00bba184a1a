//! Logging configuration and setup
//!
//! This module provides logging initialization and the structured log events
//! emitted when the engine has to degrade a result.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::LoggingConfig;
use crate::utils::errors::{I18nError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer when dropped, so callers that
/// configure `file_path` must keep it alive for the life of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| I18nError::Logging(format!("invalid filter '{}': {}", config.level, e)))?;

    let (plain, json) = if config.json {
        (None, Some(fmt::layer().json().with_writer(std::io::stdout)))
    } else {
        (Some(fmt::layer().with_writer(std::io::stdout)), None)
    };

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "tongues.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(non_blocking)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(plain)
        .with(json)
        .with(file_layer)
        .try_init()
        .map_err(|e| I18nError::Logging(e.to_string()))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a scope that resolved to nothing
pub fn log_missing_translation(locale: &str, scope: &str) {
    warn!(locale = locale, scope = scope, "Translation missing");
}

/// Log a placeholder with no matching option
pub fn log_missing_interpolation(placeholder: &str) {
    debug!(placeholder = placeholder, "Interpolation value missing");
}

/// Log a date input that could not be parsed
pub fn log_invalid_date(input: &str) {
    debug!(input = input, "Unparseable date input");
}

/// Log a catalog being installed
pub fn log_catalog_installed(locales: usize, total_keys: usize) {
    info!(
        locales = locales,
        total_keys = total_keys,
        "Translation catalog installed"
    );
}
