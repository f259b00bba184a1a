//! Integration tests for settings loading and logging setup

mod helpers;

use assert_matches::assert_matches;
use serial_test::serial;
use tongues::config::{LoggingConfig, Settings};
use tongues::utils::logging::init_logging;
use tongues::{I18nError, Translator, Zone};

#[test]
#[serial]
fn test_settings_from_environment() {
    std::env::set_var("TONGUES__I18N__DEFAULT_LOCALE", "pt-BR");
    std::env::set_var("TONGUES__I18N__UTC_OFFSET", "-03:00");
    let settings = Settings::new();
    std::env::remove_var("TONGUES__I18N__DEFAULT_LOCALE");
    std::env::remove_var("TONGUES__I18N__UTC_OFFSET");

    let settings = settings.expect("Failed to load settings");
    assert_eq!(settings.i18n.default_locale, "pt-BR");
    assert!(settings.validate().is_ok());

    let translator = Translator::new(&settings.i18n).expect("valid config");
    assert_eq!(translator.current_locale(), "pt-BR");
    assert_matches!(translator.zone(), Zone::Fixed(offset) if offset.local_minus_utc() == -3 * 3600);
}

#[test]
#[serial]
fn test_settings_defaults_without_sources() {
    let settings = Settings::new().expect("Failed to load settings");

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.logging.level, "info");
    assert!(settings.validate().is_ok());
}

#[test]
fn test_invalid_logging_filter() {
    let config = LoggingConfig {
        level: "tongues=loudest".to_string(),
        ..LoggingConfig::default()
    };

    assert_matches!(init_logging(&config), Err(I18nError::Logging(_)));
}

#[test]
#[serial]
fn test_init_logging_twice_fails() {
    helpers::init_test_env();

    // the test subscriber is already installed
    let result = init_logging(&LoggingConfig::default());
    assert_matches!(result, Err(I18nError::Logging(_)));
}
