//! Placeholder values and the immutable set produced per request.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A scalar placeholder value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlaceholderValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl PlaceholderValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PlaceholderValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            PlaceholderValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PlaceholderValue::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for PlaceholderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderValue::Int(v) => write!(f, "{}", v),
            // f64 Display is the shortest round-trip form, never exponent notation
            PlaceholderValue::Float(v) => write!(f, "{}", v),
            PlaceholderValue::Str(v) => f.write_str(v),
        }
    }
}

impl From<i64> for PlaceholderValue {
    fn from(v: i64) -> Self {
        PlaceholderValue::Int(v)
    }
}

impl From<u32> for PlaceholderValue {
    fn from(v: u32) -> Self {
        PlaceholderValue::Int(i64::from(v))
    }
}

impl From<i32> for PlaceholderValue {
    fn from(v: i32) -> Self {
        PlaceholderValue::Int(i64::from(v))
    }
}

impl From<f64> for PlaceholderValue {
    fn from(v: f64) -> Self {
        PlaceholderValue::Float(v)
    }
}

impl From<String> for PlaceholderValue {
    fn from(v: String) -> Self {
        PlaceholderValue::Str(v)
    }
}

impl From<&str> for PlaceholderValue {
    fn from(v: &str) -> Self {
        PlaceholderValue::Str(v.to_string())
    }
}

/// Finite mapping from placeholder key to freshly computed value.
///
/// Built once per request by the provider and never mutated afterwards;
/// writing it into the request's [`Replacer`](crate::server::Replacer)
/// is the job of the middleware.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PlaceholderSet {
    values: BTreeMap<String, PlaceholderValue>,
}

impl PlaceholderSet {
    pub fn get(&self, key: &str) -> Option<&PlaceholderValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys in lexicographic order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlaceholderValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for PlaceholderSet {
    type Item = (String, PlaceholderValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, PlaceholderValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// Accumulates values while the provider runs; frozen with [`build`](Self::build).
#[derive(Debug, Default)]
pub(crate) struct PlaceholderSetBuilder {
    values: BTreeMap<String, PlaceholderValue>,
}

impl PlaceholderSetBuilder {
    pub(crate) fn set(&mut self, key: impl Into<String>, value: impl Into<PlaceholderValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub(crate) fn build(self) -> PlaceholderSet {
        PlaceholderSet {
            values: self.values,
        }
    }
}
