//! Translation catalog model
//!
//! A catalog maps locale codes to trees of [`Node`]s. The shape of every
//! node is decided once, when the catalog is built from JSON, so lookups
//! never have to sniff at raw values.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use crate::utils::errors::{I18nError, Result};

/// Keys reserved for plural forms
pub const PLURAL_KEYS: [&str; 4] = ["zero", "none", "one", "other"];

/// A single node of a translation tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Node {
    /// A message
    Text(String),
    /// A mapping made only of plural forms
    Plural(PluralForms),
    /// A nested group of nodes
    Branch(BTreeMap<String, Node>),
    /// An ordered list, e.g. day or month names
    List(Vec<Node>),
    Number(f64),
    Bool(bool),
    Null,
}

/// Plural forms of a message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralForms {
    pub zero: Option<String>,
    /// Alias of `zero`
    pub none: Option<String>,
    pub one: Option<String>,
    pub other: Option<String>,
}

impl PluralForms {
    /// Form stored under `key`, if `key` is one of [`PLURAL_KEYS`]
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "zero" => self.zero.as_deref(),
            "none" => self.none.as_deref(),
            "one" => self.one.as_deref(),
            "other" => self.other.as_deref(),
            _ => None,
        }
    }

    fn slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            "zero" => Some(&mut self.zero),
            "none" => Some(&mut self.none),
            "one" => Some(&mut self.one),
            "other" => Some(&mut self.other),
            _ => None,
        }
    }

    /// Classify a JSON object as plural forms
    fn from_object(map: &Map<String, Value>) -> Option<Self> {
        if map.is_empty() {
            return None;
        }

        let mut forms = PluralForms::default();
        for (key, value) in map {
            let text = value.as_str()?;
            *forms.slot(key)? = Some(text.to_string());
        }
        Some(forms)
    }

    fn to_object(&self) -> Map<String, Value> {
        PLURAL_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|text| (key.to_string(), Value::from(text))))
            .collect()
    }
}

impl Node {
    /// Child node reached by one scope segment
    ///
    /// Plural forms are plain strings, see [`Node::form`].
    pub fn child(&self, segment: &str) -> Option<&Node> {
        match self {
            Node::Branch(children) => children.get(segment),
            Node::List(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        }
    }

    /// Text stored directly under `key` of a plural or branch node
    pub fn form(&self, key: &str) -> Option<&str> {
        match self {
            Node::Plural(forms) => forms.get(key),
            Node::Branch(children) => match children.get(key) {
                Some(Node::Text(text)) => Some(text.as_str()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Text of the list item at `index`
    pub fn item_text(&self, index: usize) -> Option<&str> {
        match self {
            Node::List(items) => match items.get(index) {
                Some(Node::Text(text)) => Some(text.as_str()),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether the node is a mapping or list rather than a scalar
    pub fn is_tree(&self) -> bool {
        matches!(self, Node::Plural(_) | Node::Branch(_) | Node::List(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Number of leaves below this node
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Branch(children) => children.values().map(Node::leaf_count).sum(),
            Node::Null => 0,
            _ => 1,
        }
    }

    /// Convert back to plain JSON
    pub fn to_value(&self) -> Value {
        match self {
            Node::Text(text) => Value::String(text.clone()),
            Node::Plural(forms) => Value::Object(forms.to_object()),
            Node::Branch(children) => Value::Object(
                children
                    .iter()
                    .map(|(key, child)| (key.clone(), child.to_value()))
                    .collect(),
            ),
            Node::List(items) => Value::Array(items.iter().map(Node::to_value).collect()),
            Node::Number(n) => Number::from_f64(*n).map(Value::Number).unwrap_or(Value::Null),
            Node::Bool(b) => Value::Bool(*b),
            Node::Null => Value::Null,
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Node::Text(text),
            Value::Number(n) => n.as_f64().map(Node::Number).unwrap_or(Node::Null),
            Value::Bool(b) => Node::Bool(b),
            Value::Null => Node::Null,
            Value::Array(items) => Node::List(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => match PluralForms::from_object(&map) {
                Some(forms) => Node::Plural(forms),
                None => Node::Branch(
                    map.into_iter()
                        .map(|(key, child)| (key, Node::from(child)))
                        .collect(),
                ),
            },
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        node.to_value()
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// Translations for every locale
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct TranslationTree {
    locales: BTreeMap<String, Node>,
}

impl TranslationTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a JSON object keyed by locale code
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(I18nError::InvalidCatalog(
                "translations must be an object keyed by locale".to_string()
            ));
        };

        let mut tree = Self::new();
        for (locale, messages) in map {
            tree.insert(locale, messages)?;
        }
        Ok(tree)
    }

    /// Parse a tree from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Add or replace the messages of one locale
    pub fn insert(&mut self, locale: impl Into<String>, messages: Value) -> Result<()> {
        let locale = locale.into();
        if !messages.is_object() {
            return Err(I18nError::InvalidCatalog(
                format!("messages for locale '{}' must be an object", locale)
            ));
        }

        let node = match Node::from(messages) {
            // an all-plural-keys object at the root is still a group of messages
            Node::Plural(forms) => Node::Branch(
                PLURAL_KEYS
                    .iter()
                    .filter_map(|key| forms.get(key).map(|text| (key.to_string(), Node::from(text))))
                    .collect(),
            ),
            node => node,
        };
        self.locales.insert(locale, node);
        Ok(())
    }

    /// Root node of a locale
    pub fn locale(&self, code: &str) -> Option<&Node> {
        self.locales.get(code)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Per-locale key counts
    pub fn stats(&self, default_locale: &str) -> TranslationStats {
        let mut stats = TranslationStats {
            locales: Vec::new(),
            total_keys: 0,
        };

        for (code, root) in &self.locales {
            let key_count = root.leaf_count();
            stats.locales.push(LocaleStats {
                code: code.clone(),
                key_count,
            });
            if code == default_locale {
                stats.total_keys = key_count;
            }
        }

        stats
    }
}

impl TryFrom<Value> for TranslationTree {
    type Error = I18nError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl From<TranslationTree> for Value {
    fn from(tree: TranslationTree) -> Self {
        Value::Object(
            tree.locales
                .into_iter()
                .map(|(code, root)| (code, root.to_value()))
                .collect(),
        )
    }
}

/// Catalog statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationStats {
    pub locales: Vec<LocaleStats>,
    /// Key count of the default locale
    pub total_keys: usize,
}

/// Locale-specific statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStats {
    pub code: String,
    pub key_count: usize,
}
