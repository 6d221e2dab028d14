use rusqlite::Connection;

/// Create the documents table if the database is new.
pub(crate) fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            id TEXT PRIMARY KEY NOT NULL,
            body TEXT NOT NULL
        );
        "#,
    )
}

/// Read the schema cookie; fails with `SQLITE_NOTADB` for foreign files.
pub(crate) fn check_readable(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("PRAGMA schema_version", [], |row| row.get(0))
}

/// Reject writes on this connection for the rest of its life.
pub(crate) fn set_read_only(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "query_only", true)
}
