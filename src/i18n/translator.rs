//! Translator facade
//!
//! A [`Translator`] owns a catalog and the locale state, and wires lookup,
//! pluralization, interpolation and formatting together behind the
//! `translate`/`localize`/`pluralize` entry points.

use std::fmt;
use chrono::{DateTime, FixedOffset, Offset, TimeZone};
use tracing::debug;
use crate::config::{parse_utc_offset, I18nConfig};
use crate::format::date::{parse_date, DateInput, ParsedDate, Zone, DISPLAY_FORMAT};
use crate::format::number::{
    currency_defaults, format_percentage, number_defaults, percentage_defaults, CurrencyFormat,
    NumberFormat,
};
use crate::format::strftime::{strftime, DateNames, Meridian};
use crate::utils::errors::{MissingTranslation, Result};
use crate::utils::logging::{log_catalog_installed, log_missing_translation};
use super::catalog::{Node, TranslationStats, TranslationTree};
use super::interpolate::interpolate;
use super::lookup::{lookup_in, Scope};
use super::options::{number_to_string, Options};
use super::plural::pluralize_node;

/// Locale used when nothing else is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Outcome of [`Translator::translate`]
#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    /// A finished message, or a missing-translation marker
    Text(String),
    /// A group or plural node requested without a count
    Tree(Node),
}

impl Translation {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Translation::Text(text) => Some(text),
            Translation::Tree(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Translation::Text(text) => Some(text),
            Translation::Tree(_) => None,
        }
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translation::Text(text) => f.write_str(text),
            Translation::Tree(node) => write!(f, "{}", node.to_value()),
        }
    }
}

impl PartialEq<str> for Translation {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Translation {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

/// Value accepted by [`Translator::localize`]
#[derive(Debug, Clone, PartialEq)]
pub enum Localizable {
    Number(f64),
    Text(String),
    Date(DateTime<FixedOffset>),
}

impl Localizable {
    /// Numeric value, reading numeric text as well
    fn as_number(&self) -> Option<f64> {
        match self {
            Localizable::Number(n) => Some(*n),
            Localizable::Text(text) => text.trim().parse::<f64>().ok(),
            Localizable::Date(_) => None,
        }
    }

    /// Numbers are millisecond timestamps
    fn into_date_input(self) -> DateInput {
        match self {
            Localizable::Number(millis) => DateInput::Millis(millis),
            Localizable::Text(text) => DateInput::Text(text),
            Localizable::Date(date) => DateInput::Instant(date),
        }
    }
}

impl fmt::Display for Localizable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Localizable::Number(n) => f.write_str(&number_to_string(*n)),
            Localizable::Text(text) => f.write_str(text),
            Localizable::Date(date) => write!(f, "{}", date.format(DISPLAY_FORMAT)),
        }
    }
}

impl From<f64> for Localizable {
    fn from(n: f64) -> Self {
        Localizable::Number(n)
    }
}

impl From<i64> for Localizable {
    fn from(n: i64) -> Self {
        Localizable::Number(n as f64)
    }
}

impl From<i32> for Localizable {
    fn from(n: i32) -> Self {
        Localizable::Number(f64::from(n))
    }
}

impl From<&str> for Localizable {
    fn from(text: &str) -> Self {
        Localizable::Text(text.to_string())
    }
}

impl From<String> for Localizable {
    fn from(text: String) -> Self {
        Localizable::Text(text)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Localizable {
    fn from(date: DateTime<Tz>) -> Self {
        let offset = date.offset().fix();
        Localizable::Date(date.with_timezone(&offset))
    }
}

/// Catalog plus locale state
#[derive(Debug, Clone)]
pub struct Translator {
    /// Translations by locale code
    translations: TranslationTree,
    /// Explicitly selected locale
    locale: Option<String>,
    /// Locale used while no explicit locale is set
    default_locale: String,
    /// Zone dates are displayed in
    zone: Zone,
}

impl Default for Translator {
    fn default() -> Self {
        Self {
            translations: TranslationTree::new(),
            locale: None,
            default_locale: DEFAULT_LOCALE.to_string(),
            zone: Zone::Local,
        }
    }
}

impl Translator {
    /// Create a translator with an empty catalog from configuration
    pub fn new(config: &I18nConfig) -> Result<Self> {
        let zone = match &config.utc_offset {
            Some(offset) => Zone::Fixed(parse_utc_offset(offset)?),
            None => Zone::Local,
        };

        Ok(Self {
            translations: TranslationTree::new(),
            locale: config.locale.clone().filter(|locale| !locale.is_empty()),
            default_locale: config.default_locale.clone(),
            zone,
        })
    }

    pub fn with_translations(mut self, translations: TranslationTree) -> Self {
        self.set_translations(translations);
        self
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    pub fn translations(&self) -> &TranslationTree {
        &self.translations
    }

    /// Replace the whole catalog
    pub fn set_translations(&mut self, translations: TranslationTree) {
        self.translations = translations;
        let stats = self.stats();
        log_catalog_installed(stats.locales.len(), stats.total_keys);
    }

    /// Explicitly selected locale, if any
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        let locale = locale.into();
        debug!(locale = %locale, "Locale selected");
        self.locale = Some(locale);
    }

    /// Go back to the default locale
    pub fn clear_locale(&mut self) {
        self.locale = None;
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn set_default_locale(&mut self, locale: impl Into<String>) {
        self.default_locale = locale.into();
    }

    /// Explicit locale if set, else the default locale
    pub fn current_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(&self.default_locale)
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn set_zone(&mut self, zone: Zone) {
        self.zone = zone;
    }

    /// Resolve `scope` in the current locale
    ///
    /// Honors the `scope` prefix and `defaultValue` options.
    pub fn lookup(&self, scope: impl Into<Scope>, options: &Options) -> Option<Node> {
        let root = self.translations.locale(self.current_locale());
        lookup_in(root, &scope.into(), options)
    }

    /// Translate `scope`
    ///
    /// Plural nodes are resolved when a numeric `count` option is present and
    /// returned as [`Translation::Tree`] otherwise. Anything that cannot be
    /// turned into a message becomes `[missing "<locale>.<scope>" translation]`.
    pub fn translate(&self, scope: impl Into<Scope>, options: &Options) -> Translation {
        let scope = scope.into();

        self.try_translate(&scope, options).unwrap_or_else(|missing| {
            log_missing_translation(self.current_locale(), scope.as_str());
            Translation::Text(missing.to_string())
        })
    }

    /// Alias of [`Translator::translate`]
    pub fn t(&self, scope: impl Into<Scope>, options: &Options) -> Translation {
        self.translate(scope, options)
    }

    fn try_translate(
        &self,
        scope: &Scope,
        options: &Options,
    ) -> std::result::Result<Translation, MissingTranslation> {
        let options = Options::merge([Some(options)]);
        let missing = || MissingTranslation::new(self.current_locale(), [scope.as_str()]);

        let node = self.lookup(scope, &options).ok_or_else(missing)?;
        match node {
            Node::Text(message) => Ok(Translation::Text(interpolate(&message, &options))),
            node if node.is_tree() => match options.get_number("count") {
                Some(count) => Ok(Translation::Text(pluralize_node(
                    &node,
                    count,
                    self.current_locale(),
                    scope,
                    &options,
                ))),
                None => Ok(Translation::Tree(node)),
            },
            _ => Err(missing()),
        }
    }

    /// Pick the plural form of `scope` for `count` and interpolate it
    pub fn pluralize(
        &self,
        count: impl Into<f64>,
        scope: impl Into<Scope>,
        options: &Options,
    ) -> String {
        let scope = scope.into();

        match self.lookup(&scope, options) {
            Some(node) => pluralize_node(&node, count.into(), self.current_locale(), &scope, options),
            None => {
                log_missing_translation(self.current_locale(), scope.as_str());
                self.missing_translation([scope.as_str()])
            }
        }
    }

    /// Alias of [`Translator::pluralize`]
    pub fn p(&self, count: impl Into<f64>, scope: impl Into<Scope>, options: &Options) -> String {
        self.pluralize(count, scope, options)
    }

    pub fn interpolate(&self, message: &str, options: &Options) -> String {
        interpolate(message, options)
    }

    /// `[missing "<locale>.<part>..." translation]` for the current locale
    pub fn missing_translation<I, S>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        MissingTranslation::new(self.current_locale(), parts).to_string()
    }

    /// Format `value` according to `scope`
    ///
    /// `currency` and `number` format numbers; scopes starting
    /// with `date` or `time` name a date format in the catalog. Any other
    /// scope, or text that is not numeric, yields the value's plain form.
    pub fn localize(&self, scope: &str, value: impl Into<Localizable>) -> String {
        let value = value.into();

        match (scope, value.as_number()) {
            ("currency", Some(number)) => self.to_currency(number, &Options::new()),
            ("number", Some(number)) => {
                let options = self.lookup_options("number.format").unwrap_or_default();
                self.to_number(number, &options)
            }
            _ if scope.starts_with("date") || scope.starts_with("time") => {
                self.to_time(scope, value.into_date_input())
            }
            _ => value.to_string(),
        }
    }

    /// Alias of [`Translator::localize`]
    pub fn l(&self, scope: &str, value: impl Into<Localizable>) -> String {
        self.localize(scope, value)
    }

    /// Options stored at `scope`, if it is a group
    fn lookup_options(&self, scope: &str) -> Option<Options> {
        self.lookup(scope, &Options::new())
            .and_then(|node| Options::from_node(&node))
    }

    /// Grouped number; options over `number.format` over built-in defaults
    pub fn to_number(&self, number: f64, options: &Options) -> String {
        let catalog = self.lookup_options("number.format");
        let options = Options::merge([Some(options), catalog.as_ref(), Some(&number_defaults())]);

        NumberFormat::from_options(&options).format(number)
    }

    /// Currency; options over `number.currency.format` over `number.format`
    pub fn to_currency(&self, number: f64, options: &Options) -> String {
        let currency = self.lookup_options("number.currency.format");
        let general = self.lookup_options("number.format");
        let options = Options::merge([
            Some(options),
            currency.as_ref(),
            general.as_ref(),
            Some(&currency_defaults()),
        ]);

        CurrencyFormat::from_options(&options).format(number)
    }

    /// Percentage; options over `number.percentage.format` over `number.format`
    pub fn to_percentage(&self, number: f64, options: &Options) -> String {
        let percentage = self.lookup_options("number.percentage.format");
        let general = self.lookup_options("number.format");
        let options = Options::merge([
            Some(options),
            percentage.as_ref(),
            general.as_ref(),
            Some(&percentage_defaults()),
        ]);

        format_percentage(number, &NumberFormat::from_options(&options))
    }

    /// Parse a date in this translator's zone
    pub fn parse_date(&self, input: impl Into<DateInput>) -> ParsedDate {
        parse_date(&input.into(), self.zone)
    }

    /// Format a date with the format stored at `scope`
    ///
    /// Invalid input yields `Invalid Date`; a scope without a format yields
    /// the default display form.
    pub fn to_time(&self, scope: impl Into<Scope>, input: impl Into<DateInput>) -> String {
        let parsed = self.parse_date(input);
        let Some(date) = parsed.valid() else {
            return parsed.to_string();
        };

        match self.lookup(scope, &Options::new()) {
            Some(Node::Text(format)) if !format.is_empty() => self.strftime(date, &format),
            _ => parsed.to_string(),
        }
    }

    /// Render `date` with the current locale's `date` names
    pub fn strftime(&self, date: &DateTime<FixedOffset>, format: &str) -> String {
        let names = self
            .lookup("date", &Options::new())
            .and_then(|node| DateNames::from_node(&node));

        match names {
            Some(names) => strftime(date, format, &names, &self.meridian()),
            None => ParsedDate::Valid(*date).to_string(),
        }
    }

    /// Meridian names from `time.am` / `time.pm`, falling back to `AM` / `PM`
    fn meridian(&self) -> Meridian {
        let defaults = Meridian::default();
        let text = |scope: &str| match self.lookup(scope, &Options::new()) {
            Some(Node::Text(text)) => Some(text),
            _ => None,
        };

        Meridian {
            am: text("time.am").unwrap_or(defaults.am),
            pm: text("time.pm").unwrap_or(defaults.pm),
        }
    }

    /// Key counts per locale
    pub fn stats(&self) -> TranslationStats {
        self.translations.stats(&self.default_locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn create_test_translator() -> Translator {
        let tree = TranslationTree::from_value(json!({
            "en": {
                "hello": "Hello {{name}}",
                "inbox": {"zero": "No messages", "one": "1 message", "other": "{{count}} messages"},
                "answer": 42
            },
            "pt": {
                "hello": "Olá {{name}}"
            }
        }))
        .expect("valid catalog");

        Translator::default()
            .with_translations(tree)
            .with_zone(Zone::utc())
    }

    #[test]
    fn test_new_from_config() {
        let config = I18nConfig {
            default_locale: "pt".to_string(),
            locale: Some("de".to_string()),
            utc_offset: Some("+01:00".to_string()),
        };
        let translator = Translator::new(&config).expect("valid config");
        assert_eq!(translator.current_locale(), "de");
        assert_eq!(translator.default_locale(), "pt");
        assert_matches!(translator.zone(), Zone::Fixed(offset) if offset.local_minus_utc() == 3600);

        let config = I18nConfig { utc_offset: Some("soon".to_string()), ..I18nConfig::default() };
        assert!(Translator::new(&config).is_err());
    }

    #[test]
    fn test_current_locale_resolution() {
        let mut translator = create_test_translator();
        assert_eq!(translator.current_locale(), "en");
        assert_eq!(translator.locale(), None);

        translator.set_locale("pt");
        assert_eq!(translator.current_locale(), "pt");
        assert_eq!(translator.t("hello", &Options::new().with("name", "Ana")), "Olá Ana");

        translator.clear_locale();
        assert_eq!(translator.t("hello", &Options::new().with("name", "Ann")), "Hello Ann");
    }

    #[test]
    fn test_translate_dispatch() {
        let translator = create_test_translator();

        assert_eq!(translator.t("inbox", &Options::new().with("count", 3)), "3 messages");
        assert_matches!(translator.t("inbox", &Options::new()), Translation::Tree(Node::Plural(_)));
        assert_eq!(
            translator.t("inbox", &Options::new().with("count", "3")).as_text(),
            None
        );
    }

    #[test]
    fn test_scalar_leaf_is_missing() {
        let translator = create_test_translator();
        assert_eq!(translator.t("answer", &Options::new()), "[missing \"en.answer\" translation]");
    }

    #[test]
    fn test_pluralize_missing_scope() {
        let translator = create_test_translator();
        assert_eq!(
            translator.p(2, "nothing.here", &Options::new()),
            "[missing \"en.nothing.here\" translation]"
        );
    }

    #[test]
    fn test_translation_display() {
        assert_eq!(Translation::Text("Hi".to_string()).to_string(), "Hi");
        let tree = Translation::Tree(Node::from(json!({"one": "1"})));
        assert_eq!(tree.to_string(), r#"{"one":"1"}"#);
    }

    #[test]
    fn test_localize_fallbacks() {
        let translator = create_test_translator();
        assert_eq!(translator.l("unknown", 12.5), "12.5");
        assert_eq!(translator.l("currency", "abc"), "abc");
        assert_eq!(translator.l("currency", "12"), "$12.00");
        assert_eq!(translator.l("percentage", 12.3456), "12.3456");
        assert_eq!(translator.l("date.formats.short", "garbage"), "Invalid Date");
    }

    #[test]
    fn test_stats() {
        let translator = create_test_translator();
        let stats = translator.stats();
        assert_eq!(stats.total_keys, 3);
        assert_eq!(stats.locales.len(), 2);
    }
}
