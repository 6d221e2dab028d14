//! Integration tests for DatabaseConnection against real database files.

mod common;

use common::{insert_raw, seed_database};
use dbv_model::{JsonValue, Scalar};
use dbv_store::{DatabaseConnection, OpenError, QueryError};
use proptest::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn people(dir: &TempDir) -> String {
    seed_database(
        dir.path(),
        "people",
        &[
            ("u3", json!({ "type": "user", "name": "Cleo", "age": 41 })),
            ("u1", json!({ "type": "user", "name": "Ana", "age": 29 })),
            ("u2", json!({ "type": "user", "name": "Bo", "age": 35, "tags": ["a", "b"] })),
            ("o1", json!({ "type": "order", "total": 12.5, "lines": [{ "sku": "X" }] })),
            ("n1", json!({ "note": "untyped" })),
            ("n2", json!({ "type": 7 })),
            ("n3", json!({ "type": null })),
        ],
    )
}

#[test]
fn lists_distinct_string_types_in_order() {
    let dir = TempDir::new().unwrap();
    let path = people(&dir);

    let mut db = DatabaseConnection::new();
    db.open(&path).unwrap();

    assert_eq!(db.list_types().unwrap(), ["order", "user"]);
}

#[test]
fn queries_documents_by_type_ordered_by_id() {
    let dir = TempDir::new().unwrap();
    let path = people(&dir);

    let mut db = DatabaseConnection::new();
    db.open(&path).unwrap();

    let docs = db.query_by_type("user", None).unwrap();
    let ids: Vec<_> = docs.iter().map(|d| d.id()).collect();
    assert_eq!(ids, ["u1", "u2", "u3"]);

    let u2 = &docs[1];
    assert_eq!(
        u2.properties().keys().collect::<Vec<_>>(),
        ["type", "name", "age", "tags"]
    );
    assert!(matches!(
        u2.properties().get("tags"),
        Some(JsonValue::Array(items)) if items.len() == 2
    ));
}

#[test]
fn filter_fragment_is_conjoined() {
    let dir = TempDir::new().unwrap();
    let path = people(&dir);

    let mut db = DatabaseConnection::new();
    db.open(&path).unwrap();

    let docs = db.query_by_type("user", Some("age > 30")).unwrap();
    let ids: Vec<_> = docs.iter().map(|d| d.id()).collect();
    assert_eq!(ids, ["u2", "u3"]);

    let blank = db.query_by_type("user", Some("   ")).unwrap();
    assert_eq!(blank.len(), 3);
}

#[test]
fn filter_reaches_nested_values_through_doc_column() {
    let dir = TempDir::new().unwrap();
    let path = people(&dir);

    let mut db = DatabaseConnection::new();
    db.open(&path).unwrap();

    let docs = db
        .query_by_type("order", Some("_doc ->> '$.lines[0].sku' = 'X'"))
        .unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(
        docs[0].properties().get("total"),
        Some(&JsonValue::Scalar(Scalar::Number(
            serde_json::Number::from_f64(12.5).unwrap()
        )))
    );
}

#[test]
fn malformed_filter_is_an_error_not_an_empty_list() {
    let dir = TempDir::new().unwrap();
    let path = people(&dir);

    let mut db = DatabaseConnection::new();
    db.open(&path).unwrap();

    let err = db.query_by_type("user", Some("age >")).unwrap_err();
    assert!(matches!(err, QueryError::Sqlite { .. }));

    let err = db.query_by_type("user", Some("no_such_column = 1")).unwrap_err();
    assert!(err.user_message().contains("no_such_column"));
}

#[test]
fn filter_cannot_modify_the_database() {
    let dir = TempDir::new().unwrap();
    let path = people(&dir);

    let mut db = DatabaseConnection::new();
    db.open(&path).unwrap();

    let _ = db.query_by_type("user", Some("1); DELETE FROM documents; --"));
    assert_eq!(db.query_by_type("user", None).unwrap().len(), 3);
}

#[test]
fn unknown_type_yields_empty_list() {
    let dir = TempDir::new().unwrap();
    let path = people(&dir);

    let mut db = DatabaseConnection::new();
    db.open(&path).unwrap();

    assert!(db.query_by_type("invoice", None).unwrap().is_empty());
}

#[test]
fn closed_connection_answers_empty() {
    let db = DatabaseConnection::new();
    assert!(!db.is_open());
    assert!(db.list_types().unwrap().is_empty());
    assert!(db.query_by_type("user", Some("age >")).unwrap().is_empty());
}

#[test]
fn close_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = people(&dir);

    let mut db = DatabaseConnection::new();
    db.open(&path).unwrap();
    db.close();
    db.close();
    assert!(!db.is_open());
    assert!(db.location().is_none());
}

#[test]
fn open_creates_missing_location() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fresh.docdb");

    let mut db = DatabaseConnection::new();
    db.open(path.to_str().unwrap()).unwrap();

    assert!(path.join("db.sqlite3").is_file());
    assert_eq!(db.location().unwrap().name(), "fresh");
    assert!(db.list_types().unwrap().is_empty());
}

#[test]
fn path_without_extension_maps_to_docdb_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain");

    let mut db = DatabaseConnection::new();
    db.open(path.to_str().unwrap()).unwrap();

    assert!(dir.path().join("plain.docdb").is_dir());
}

#[test]
fn foreign_file_is_not_a_database() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("broken.docdb");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("db.sqlite3"), vec![0x42u8; 4096]).unwrap();

    let mut db = DatabaseConnection::new();
    let err = db.open(root.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, OpenError::NotADatabase { .. }), "{err:?}");
    assert!(!db.is_open());
}

#[test]
fn location_under_a_file_cannot_be_created() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let mut db = DatabaseConnection::new();
    let err = db
        .open(blocker.join("db.docdb").to_str().unwrap())
        .unwrap_err();
    assert!(matches!(err, OpenError::CreateDirectory { .. }), "{err:?}");
}

#[test]
fn failed_open_leaves_previous_database_closed() {
    let dir = TempDir::new().unwrap();
    let path = people(&dir);

    let mut db = DatabaseConnection::new();
    db.open(&path).unwrap();
    assert!(db.open("").is_err());
    assert!(!db.is_open());
}

#[test]
fn non_object_rows_never_match_a_type() {
    let dir = TempDir::new().unwrap();
    let path = people(&dir);
    insert_raw(&path, "arr", r#"["type", "user"]"#);

    let mut db = DatabaseConnection::new();
    db.open(&path).unwrap();

    assert_eq!(db.query_by_type("user", None).unwrap().len(), 3);
    assert_eq!(
        db.query_by_type("user", Some("_id = 'arr' OR 1 = 1")).unwrap().len(),
        3
    );
}

#[test]
fn malformed_json_rows_do_not_break_listing() {
    let dir = TempDir::new().unwrap();
    let path = people(&dir);
    insert_raw(&path, "junk", "{not json");

    let mut db = DatabaseConnection::new();
    db.open(&path).unwrap();

    assert_eq!(db.list_types().unwrap(), ["order", "user"]);
    assert_eq!(db.query_by_type("user", None).unwrap().len(), 3);
}

#[test]
fn filter_matches_keys_spelled_in_another_case() {
    let dir = TempDir::new().unwrap();
    let path = seed_database(
        dir.path(),
        "mixed",
        &[
            ("a", json!({ "type": "user", "age": 20 })),
            ("b", json!({ "type": "order", "Age": 40 })),
            ("c", json!({ "type": "user", "AGE": 5 })),
        ],
    );

    let mut db = DatabaseConnection::new();
    db.open(&path).unwrap();

    let ids = |filter: &str| -> Vec<String> {
        db.query_by_type("user", Some(filter))
            .unwrap()
            .iter()
            .map(|d| d.id().to_string())
            .collect()
    };
    assert_eq!(ids("age > 10"), ["a"]);
    assert_eq!(ids("Age < 10"), ["c"]);
    assert_eq!(
        db.query_by_type("order", Some("age = 40")).unwrap().len(),
        1
    );
}

#[test]
fn container_type_values_are_not_types() {
    let dir = TempDir::new().unwrap();
    let path = seed_database(
        dir.path(),
        "shapes",
        &[
            ("a", json!({ "type": "user" })),
            ("b", json!({ "type": { "k": 1 } })),
            ("c", json!({ "type": [1, 2] })),
            ("d", json!({ "type": true })),
        ],
    );

    let mut db = DatabaseConnection::new();
    db.open(&path).unwrap();

    assert_eq!(db.list_types().unwrap(), ["user"]);
    assert!(db.query_by_type("[1,2]", None).unwrap().is_empty());
    assert!(db.query_by_type(r#"{"k":1}"#, None).unwrap().is_empty());
}

#[test]
fn rows_with_empty_id_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = seed_database(
        dir.path(),
        "blank",
        &[
            ("a", json!({ "type": "user", "age": 30 })),
            ("", json!({ "type": "user", "age": 31 })),
        ],
    );

    let mut db = DatabaseConnection::new();
    db.open(&path).unwrap();

    let docs = db.query_by_type("user", None).unwrap();
    assert_eq!(docs.iter().map(|d| d.id()).collect::<Vec<_>>(), ["a"]);
    assert_eq!(db.query_by_type("user", Some("age > 0")).unwrap().len(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn reopening_keeps_one_handle(sequence in prop::collection::vec(0usize..3, 1..8)) {
        let dir = TempDir::new().unwrap();
        let paths: Vec<String> = ["alpha", "beta", "gamma"]
            .iter()
            .map(|name| seed_database(dir.path(), name, &[]))
            .collect();

        let mut db = DatabaseConnection::new();
        for &pick in &sequence {
            db.open(&paths[pick]).unwrap();
            prop_assert!(db.is_open());
            let expected = ["alpha", "beta", "gamma"][pick];
            prop_assert_eq!(db.location().map(|l| l.name()), Some(expected));
        }
        db.close();
        prop_assert!(!db.is_open());
    }
}
