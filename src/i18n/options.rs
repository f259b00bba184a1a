//! Call options
//!
//! Options parametrize lookups (`scope`, `defaultValue`, `count`) and
//! formatting (`precision`, `separator`, `delimiter`, `unit`, `format`).
//! Several sources are usually combined with [`Options::merge`], where the
//! leftmost non-null value of each key wins.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use super::catalog::Node;

/// Flat mapping of option names to JSON scalars
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(BTreeMap<String, Value>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Value under `key`, treating `null` as absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    /// String form of the value under `key`
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(value_to_string)
    }

    /// Value under `key` if it is a JSON number
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Merge sources left to right; the first non-null value of a key wins
    ///
    /// ```
    /// use tongues::Options;
    ///
    /// let caller = Options::new().with("name", "John Doe");
    /// let fallback = Options::new().with("name", "Mary Doe").with("role", "user");
    /// let merged = Options::merge([Some(&caller), None, Some(&fallback)]);
    /// assert_eq!(merged.get_text("name").as_deref(), Some("John Doe"));
    /// assert_eq!(merged.get_text("role").as_deref(), Some("user"));
    /// ```
    pub fn merge<'a, I>(sources: I) -> Options
    where
        I: IntoIterator<Item = Option<&'a Options>>,
    {
        let mut merged = Options::new();

        for source in sources.into_iter().flatten() {
            for (key, value) in &source.0 {
                let vacant = merged.0.get(key).map_or(true, Value::is_null);
                if vacant {
                    merged.0.insert(key.clone(), value.clone());
                }
            }
        }

        merged
    }

    /// Options stored in a catalog group, e.g. `number.format`
    pub fn from_node(node: &Node) -> Option<Options> {
        match node.to_value() {
            Value::Object(map) => Some(map.into_iter().collect()),
            _ => None,
        }
    }
}

impl FromIterator<(String, Value)> for Options {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Options(iter.into_iter().collect())
    }
}

impl From<serde_json::Map<String, Value>> for Options {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Options {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect()
    }
}

/// String form of an option value; `None` for null
pub fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => number_to_string(f),
            _ => n.to_string(),
        }),
        other => Some(other.to_string()),
    }
}

/// Smallest magnitude printed without an exponent
const MIN_PLAIN_MAGNITUDE: f64 = 1e-6;

/// Smallest magnitude printed with an exponent again
const MAX_PLAIN_MAGNITUDE: f64 = 1e21;

/// Shortest string form of a number, without a trailing `.0`
///
/// Magnitudes from `1e21` up, or below `1e-6`, use exponent form with an
/// explicit sign: `1e+21`, `1.5e-7`.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n < 0.0 { "-" } else { "" };
        format!("{}Infinity", sign)
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= MAX_PLAIN_MAGNITUDE || n.abs() < MIN_PLAIN_MAGNITUDE {
        let formatted = format!("{:e}", n);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        n.to_string()
    }
}
