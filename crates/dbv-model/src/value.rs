//! Recursive JSON-like values.
//!
//! [`JsonValue`] is a closed sum type so consumers (most importantly the
//! property renderer) can match exhaustively instead of inspecting types at
//! runtime.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Number, Value};

// =============================================================================
// SCALAR
// =============================================================================

/// Leaf value of a document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl Scalar {
    /// Short name of the scalar kind, for logging and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
        }
    }
}

/// Textual form shown to users: `null` literally, numbers and booleans in
/// their canonical form, strings as-is (no quotes).
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
        }
    }
}

// =============================================================================
// OBJECT MAP
// =============================================================================

/// String-keyed map that keeps insertion order.
///
/// Keys are unique: collecting a repeated key keeps its first position and
/// the last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectMap {
    entries: IndexMap<String, JsonValue>,
}

impl ObjectMap {
    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.entries.get(key)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, JsonValue)> for ObjectMap {
    fn from_iter<I: IntoIterator<Item = (K, JsonValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl From<serde_json::Map<String, Value>> for ObjectMap {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().map(|(k, v)| (k, JsonValue::from(v))).collect()
    }
}

// =============================================================================
// JSON VALUE
// =============================================================================

/// A node of a document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Object(ObjectMap),
    Array(Vec<JsonValue>),
    Scalar(Scalar),
}

impl JsonValue {
    /// Short name of the value kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::Scalar(s) => s.kind(),
        }
    }

    /// Nesting depth: scalars and empty containers are 0, a container adds one
    /// level on top of its deepest child.
    ///
    /// Walks the tree with an explicit stack.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&JsonValue, usize)> = vec![(self, 0)];
        while let Some((value, level)) = stack.pop() {
            match value {
                Self::Object(map) => {
                    if !map.is_empty() {
                        deepest = deepest.max(level + 1);
                    }
                    stack.extend(map.iter().map(|(_, v)| (v, level + 1)));
                }
                Self::Array(items) => {
                    if !items.is_empty() {
                        deepest = deepest.max(level + 1);
                    }
                    stack.extend(items.iter().map(|v| (v, level + 1)));
                }
                Self::Scalar(_) => {}
            }
        }
        deepest
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n)),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(ObjectMap::from(map)),
        }
    }
}

impl From<Scalar> for JsonValue {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}
