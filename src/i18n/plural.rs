//! Plural form selection
//!
//! Only the English-like `zero`/`one`/`other` categories are modelled.
//! `none` is accepted as an alias of `zero`.

use super::catalog::Node;
use super::interpolate::interpolate;
use super::lookup::Scope;
use super::options::{number_to_string, Options};
use crate::utils::errors::MissingTranslation;

/// Plural category chosen from a count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    Zero,
    One,
    Other,
}

impl PluralCategory {
    /// Category for the magnitude of `count`
    pub fn for_count(count: f64) -> Self {
        let magnitude = count.abs();
        if magnitude == 0.0 {
            PluralCategory::Zero
        } else if magnitude == 1.0 {
            PluralCategory::One
        } else {
            PluralCategory::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Other => "other",
        }
    }

    /// Catalog keys tried in order for this category
    fn candidates(&self) -> &'static [&'static str] {
        match self {
            PluralCategory::Zero => &["zero", "none", "other"],
            PluralCategory::One => &["one"],
            PluralCategory::Other => &["other"],
        }
    }
}

/// Pick the message for `count` out of a plural node
///
/// Falls back to a missing-translation marker tagged with the category.
pub fn select_message(node: &Node, count: f64, locale: &str, scope: &Scope) -> String {
    let category = PluralCategory::for_count(count);

    category
        .candidates()
        .iter()
        .filter_map(|key| node.form(key))
        .find(|message| !message.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            MissingTranslation::new(locale, [scope.as_str(), category.as_str()]).to_string()
        })
}

/// Select and interpolate the message for `count`, exposing it as `{{count}}`
pub fn pluralize_node(
    node: &Node,
    count: f64,
    locale: &str,
    scope: &Scope,
    options: &Options,
) -> String {
    let mut options = options.clone();
    options.insert("count", number_to_string(count));

    let message = select_message(node, count, locale, scope);
    interpolate(&message, &options)
}
