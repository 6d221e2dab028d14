//! Data model for the document store viewer.
//!
//! Documents are schema-less records: a unique id plus an ordered tree of
//! JSON-like values. This crate holds the value types shared by the storage
//! layer, the browser state machine and the GUI.
//!
//! # Example
//!
//! ```
//! use dbv_model::{Document, JsonValue};
//!
//! let body = serde_json::json!({ "type": "user", "age": 42 });
//! let doc = Document::from_json("user::1", body).unwrap();
//!
//! assert_eq!(doc.id(), "user::1");
//! assert_eq!(doc.depth(), 1);
//! assert!(matches!(doc.properties().get("age"), Some(JsonValue::Scalar(_))));
//! ```

mod document;
mod error;
mod value;

pub use document::{Document, TYPE_FIELD};
pub use error::{ModelError, Result};
pub use value::{JsonValue, ObjectMap, Scalar};
