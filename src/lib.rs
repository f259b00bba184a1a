//! Tongues
//!
//! Client-side translation engine. Given a nested translation catalog and a
//! current locale it resolves scoped message keys, interpolates `{{name}}`
//! placeholders, picks plural forms, and formats dates, numbers, currency
//! and percentages with locale data stored in the catalog.
//!
//! ```
//! use serde_json::json;
//! use tongues::{Options, TranslationTree, Translator};
//!
//! let catalog = TranslationTree::from_value(json!({
//!     "en": {"inbox": {"one": "1 message", "other": "{{count}} messages"}}
//! }))
//! .unwrap();
//! let translator = Translator::default().with_translations(catalog);
//!
//! assert_eq!(translator.t("inbox", &Options::new().with("count", 4)), "4 messages");
//! assert_eq!(translator.t("outbox", &Options::new()), "[missing \"en.outbox\" translation]");
//! ```

pub mod config;
pub mod format;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{I18nError, MissingTranslation, Result};

// Re-export main components for easy access
pub use format::{DateInput, ParsedDate, Zone};
pub use i18n::{
    global, interpolate, Localizable, Node, Options, Scope, Translation, TranslationTree,
    Translator,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
