//! Internationalization module
//!
//! This module handles catalog modelling, scoped lookup, placeholder
//! interpolation, pluralization and the translator facade that ties them
//! together with the formatters.

pub mod catalog;
pub mod global;
pub mod interpolate;
pub mod lookup;
pub mod options;
pub mod plural;
pub mod translator;

// Re-export commonly used i18n components
pub use catalog::{LocaleStats, Node, PluralForms, TranslationStats, TranslationTree};
pub use interpolate::interpolate;
pub use lookup::Scope;
pub use options::Options;
pub use plural::PluralCategory;
pub use translator::{Localizable, Translation, Translator, DEFAULT_LOCALE};
