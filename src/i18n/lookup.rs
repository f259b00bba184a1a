//! Scoped key lookup

use std::fmt;
use serde_json::Value;
use super::catalog::Node;
use super::options::{value_to_string, Options};

/// A dotted key path such as `greetings.hello`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope(String);

impl Scope {
    pub fn new(scope: impl Into<String>) -> Self {
        Self(scope.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Scope with the `scope` option prepended, if any
    ///
    /// Empty text, `false` and `0` count as unset.
    pub fn qualified(&self, options: &Options) -> String {
        let prefix = options.get("scope").filter(|value| match value {
            Value::String(text) => !text.is_empty(),
            Value::Bool(flag) => *flag,
            Value::Number(n) => n.as_f64() != Some(0.0),
            _ => true,
        });

        match prefix.and_then(value_to_string) {
            Some(prefix) => format!("{}.{}", prefix, self.0),
            None => self.0.clone(),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Scope {
    fn from(scope: &str) -> Self {
        Self(scope.to_string())
    }
}

impl From<String> for Scope {
    fn from(scope: String) -> Self {
        Self(scope)
    }
}

impl From<&String> for Scope {
    fn from(scope: &String) -> Self {
        Self(scope.clone())
    }
}

impl From<&Scope> for Scope {
    fn from(scope: &Scope) -> Self {
        scope.clone()
    }
}

impl<S: AsRef<str>> From<&[S]> for Scope {
    fn from(segments: &[S]) -> Self {
        Self(join_segments(segments))
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Scope {
    fn from(segments: [S; N]) -> Self {
        Self(join_segments(&segments))
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Scope {
    fn from(segments: Vec<S>) -> Self {
        Self(join_segments(&segments))
    }
}

fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(".")
}

/// Walk `scope` down from a locale root
///
/// Falls back to the `defaultValue` option when any segment is missing.
pub fn lookup_in(root: Option<&Node>, scope: &Scope, options: &Options) -> Option<Node> {
    let root = root?;
    let full_scope = scope.qualified(options);
    let segments: Vec<&str> = full_scope.split('.').collect();

    let mut current = root;
    for (index, segment) in segments.iter().enumerate() {
        let found = match current {
            Node::Plural(_) => {
                // plural forms are leaves
                if index + 1 == segments.len() {
                    return current
                        .form(segment)
                        .map(Node::from)
                        .or_else(|| default_value(options));
                }
                None
            }
            _ => current.child(segment).filter(|node| !node.is_null()),
        };

        match found {
            Some(node) => current = node,
            None => return default_value(options),
        }
    }

    Some(current.clone())
}

fn default_value(options: &Options) -> Option<Node> {
    options.get("defaultValue").cloned().map(Node::from)
}
