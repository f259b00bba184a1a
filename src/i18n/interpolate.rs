//! `{{name}}` placeholder interpolation

use std::sync::OnceLock;
use regex::Regex;
use super::options::Options;
use crate::utils::logging::log_missing_interpolation;

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{\{(.*?)\}\}").expect("placeholder pattern is valid"))
}

/// Substitute `{{name}}` placeholders from `options`
///
/// Placeholders are collected before any substitution. Each one found then
/// replaces the first remaining occurrence of its exact text, so repeated
/// placeholders are replaced one occurrence at a time. A placeholder without
/// a non-null option becomes `[missing {{name}} value]`.
///
/// ```
/// use tongues::{interpolate, Options};
///
/// let options = Options::new().with("name", "Ann");
/// assert_eq!(interpolate("Hello {{name}}", &options), "Hello Ann");
/// assert_eq!(interpolate("Hi {{name}}", &Options::new()), "Hi [missing {{name}} value]");
/// ```
pub fn interpolate(message: &str, options: &Options) -> String {
    let placeholders: Vec<(String, String)> = placeholder_regex()
        .captures_iter(message)
        .map(|caps| (caps[0].to_string(), caps[1].to_string()))
        .collect();

    if placeholders.is_empty() {
        return message.to_string();
    }

    let mut result = message.to_string();
    for (placeholder, name) in placeholders {
        let value = match options.get_text(&name) {
            Some(value) => value,
            None => {
                log_missing_interpolation(&placeholder);
                format!("[missing {} value]", placeholder)
            }
        };
        result = result.replacen(&placeholder, &value, 1);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_placeholders() {
        assert_eq!(interpolate("Plain text", &Options::new()), "Plain text");
        assert_eq!(interpolate("{single} braces", &Options::new()), "{single} braces");
    }

    #[test]
    fn test_multiple_placeholders() {
        let options = Options::new().with("first", "Ann").with("count", 3);
        assert_eq!(
            interpolate("{{first}} has {{count}} new messages", &options),
            "Ann has 3 new messages"
        );
    }

    #[test]
    fn test_repeated_placeholder() {
        let options = Options::new().with("word", "echo");
        assert_eq!(interpolate("{{word}}, {{word}}!", &options), "echo, echo!");
    }

    #[test]
    fn test_missing_and_null_values() {
        let options = Options::new().with("name", json!(null));
        assert_eq!(
            interpolate("Dear {{name}} from {{city}}", &options),
            "Dear [missing {{name}} value] from [missing {{city}} value]"
        );
    }

    #[test]
    fn test_value_containing_later_placeholder() {
        // the second match replaces the first remaining occurrence, which
        // is now the one introduced by the first value
        let options = Options::new().with("a", "{{b}}").with("b", "B");
        assert_eq!(interpolate("{{a}} {{b}}", &options), "B {{b}}");
    }

    #[test]
    fn test_non_greedy_match() {
        let options = Options::new().with("x", 1).with("y", 2);
        assert_eq!(interpolate("{{x}}}}{{y}}", &options), "1}}2");
    }

    #[test]
    fn test_idempotent_without_leftover_placeholders() {
        let options = Options::new().with("name", "Ann");
        let once = interpolate("Hello {{name}}", &options);
        assert_eq!(interpolate(&once, &options), once);
    }
}
