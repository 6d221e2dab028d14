//! Tests for dbv-model types.

use dbv_model::{Document, JsonValue, ModelError, ObjectMap, Scalar};
use serde_json::json;

#[test]
fn document_keeps_nested_structure() {
    let doc = Document::parse(
        "order::17",
        r#"{"type":"order","lines":[{"sku":"A-1","qty":2}],"paid":false,"note":null}"#,
    )
    .expect("parse document");

    assert_eq!(doc.id(), "order::17");
    assert_eq!(
        doc.properties().keys().collect::<Vec<_>>(),
        ["type", "lines", "paid", "note"]
    );

    let Some(JsonValue::Array(lines)) = doc.properties().get("lines") else {
        panic!("lines should be an array");
    };
    assert_eq!(lines.len(), 1);
    let JsonValue::Object(line) = &lines[0] else {
        panic!("line should be an object");
    };
    assert_eq!(
        line.get("sku"),
        Some(&JsonValue::Scalar(Scalar::String("A-1".into())))
    );
    assert_eq!(doc.properties().get("note"), Some(&JsonValue::Scalar(Scalar::Null)));
}

#[test]
fn document_from_scalar_body_is_an_error() {
    let err = Document::from_json("x", json!("just text")).unwrap_err();
    assert!(matches!(err, ModelError::NotAnObject { found: "string", .. }));
    assert!(err.to_string().contains("'x'"));
}

#[test]
fn repeated_keys_keep_first_position() {
    let map: ObjectMap = [
        ("b", JsonValue::Scalar(Scalar::Null)),
        ("a", JsonValue::Scalar(Scalar::Null)),
        ("b", Scalar::Bool(true).into()),
    ]
    .into_iter()
    .collect();

    assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a"]);
    assert_eq!(map.get("b"), Some(&JsonValue::Scalar(Scalar::Bool(true))));
}
