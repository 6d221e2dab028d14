//! Shared fixtures for store integration tests.

#![allow(dead_code)]

use std::path::Path;

use dbv_store::{DatabaseConnection, DatabaseLocation};
use rusqlite::Connection;
use serde_json::Value;

/// Create `<dir>/<name>.docdb` and fill it with `(id, body)` rows.
///
/// Returns the path string a user would pick.
pub fn seed_database(dir: &Path, name: &str, documents: &[(&str, Value)]) -> String {
    let path = dir.join(format!("{name}.docdb")).to_string_lossy().into_owned();

    // Let the store create the layout and schema.
    let mut store = DatabaseConnection::new();
    store.open(&path).expect("create database");
    store.close();

    let file = DatabaseLocation::parse(&path).unwrap().database_file();
    let conn = Connection::open(file).expect("open sqlite file");
    for (id, body) in documents {
        conn.execute(
            "INSERT INTO documents (id, body) VALUES (?1, ?2)",
            (id, body.to_string()),
        )
        .expect("insert document");
    }
    path
}

/// Insert a row whose body is stored verbatim.
pub fn insert_raw(path: &str, id: &str, body: &str) {
    let file = DatabaseLocation::parse(path).unwrap().database_file();
    let conn = Connection::open(file).expect("open sqlite file");
    conn.execute(
        "INSERT INTO documents (id, body) VALUES (?1, ?2)",
        (id, body),
    )
    .expect("insert raw row");
}
