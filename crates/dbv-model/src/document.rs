//! Document record.

use serde_json::Value;

use crate::error::{ModelError, Result};
use crate::value::{JsonValue, ObjectMap};

/// Conventional top-level field used to classify documents.
pub const TYPE_FIELD: &str = "type";

/// A uniquely identified, schema-less record.
///
/// Immutable once constructed: the id is never empty and `properties` never
/// contains the id itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    id: String,
    properties: ObjectMap,
}

impl Document {
    /// Create a document from an id and its property map.
    pub fn new(id: impl Into<String>, properties: ObjectMap) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(ModelError::EmptyId);
        }
        Ok(Self { id, properties })
    }

    /// Create a document from a parsed JSON body.
    ///
    /// The body must be a JSON object.
    pub fn from_json(id: impl Into<String>, body: Value) -> Result<Self> {
        let id = id.into();
        match body {
            Value::Object(map) => Self::new(id, ObjectMap::from(map)),
            other => Err(ModelError::NotAnObject {
                id,
                found: JsonValue::from(other).kind(),
            }),
        }
    }

    /// Create a document from a raw JSON text body.
    pub fn parse(id: impl Into<String>, body: &str) -> Result<Self> {
        let id = id.into();
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_json(id, value),
            Err(e) => Err(ModelError::InvalidBody {
                id,
                reason: e.to_string(),
            }),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn properties(&self) -> &ObjectMap {
        &self.properties
    }

    /// Nesting depth of the property tree, as [`JsonValue::depth`] counts it
    /// for an object.
    pub fn depth(&self) -> usize {
        self.properties
            .iter()
            .map(|(_, value)| value.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_empty_id() {
        let err = Document::new("", ObjectMap::default()).unwrap_err();
        assert_eq!(err, ModelError::EmptyId);
    }

    #[test]
    fn rejects_non_object_body() {
        let err = Document::from_json("doc-1", json!([1, 2])).unwrap_err();
        assert_eq!(
            err,
            ModelError::NotAnObject {
                id: "doc-1".into(),
                found: "array",
            }
        );
    }

    #[test]
    fn parse_reports_invalid_json() {
        let err = Document::parse("doc-1", "{not json").unwrap_err();
        assert!(matches!(err, ModelError::InvalidBody { ref id, .. } if id == "doc-1"));
    }

    #[test]
    fn depth_matches_object_value() {
        let body = json!({ "type": "order", "lines": [{ "sku": "A-1" }] });
        let doc = Document::from_json("a", body.clone()).unwrap();
        assert_eq!(doc.depth(), JsonValue::from(body).depth());
        assert_eq!(doc.depth(), 3);

        let empty = Document::from_json("b", json!({})).unwrap();
        assert_eq!(empty.depth(), 0);
    }
}
