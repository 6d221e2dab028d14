//! The single database handle.

use std::fs;

use dbv_model::Document;
use rusqlite::types::Value;
use rusqlite::{Connection, ErrorCode, OpenFlags};
use tracing::{debug, info, warn};

use crate::error::{OpenError, QueryError};
use crate::location::DatabaseLocation;
use crate::query::{self, PROPERTY_KEYS_SQL};
use crate::schema;

/// Owns at most one open database.
///
/// Opening while a database is open closes the previous handle first, so
/// there is never more than one live handle. All operations block.
#[derive(Debug, Default)]
pub struct DatabaseConnection {
    open: Option<OpenDatabase>,
}

#[derive(Debug)]
struct OpenDatabase {
    location: DatabaseLocation,
    conn: Connection,
    /// `WITH _ AS (...)` clause computed when the database was opened.
    projection: String,
}

impl DatabaseConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open (or create) the database at `path`.
    ///
    /// Any open database is closed first, even when the new open fails.
    pub fn open(&mut self, path: &str) -> Result<(), OpenError> {
        self.close();

        let location = DatabaseLocation::parse(path)?;
        let root = location.root();
        fs::create_dir_all(&root).map_err(|source| OpenError::CreateDirectory {
            path: root.clone(),
            source,
        })?;

        let file = location.database_file();
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(&file, flags).map_err(|source| {
            OpenError::Sqlite {
                path: file.clone(),
                source,
            }
        })?;

        let classify = |source: rusqlite::Error| {
            if source.sqlite_error_code() == Some(ErrorCode::NotADatabase) {
                OpenError::NotADatabase {
                    path: file.clone(),
                    source,
                }
            } else {
                OpenError::Sqlite {
                    path: file.clone(),
                    source,
                }
            }
        };

        schema::check_readable(&conn).map_err(classify)?;
        schema::init_schema(&conn).map_err(classify)?;
        let projection = load_projection(&conn).map_err(classify)?;
        schema::set_read_only(&conn).map_err(classify)?;

        info!(
            path = %root.display(),
            name = location.name(),
            "Database opened"
        );
        self.open = Some(OpenDatabase {
            location,
            conn,
            projection,
        });
        Ok(())
    }

    /// Release the handle if one is open. Never fails.
    pub fn close(&mut self) {
        let Some(db) = self.open.take() else {
            return;
        };
        let name = db.location.name().to_string();
        match db.conn.close() {
            Ok(()) => info!(name = %name, "Database closed"),
            // The handle is dropped either way.
            Err((_, e)) => warn!(name = %name, error = %e, "Database did not close cleanly"),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Location of the open database.
    pub fn location(&self) -> Option<&DatabaseLocation> {
        self.open.as_ref().map(|db| &db.location)
    }

    /// Distinct non-null string values of the `type` field, ascending.
    ///
    /// Empty when no database is open.
    pub fn list_types(&self) -> Result<Vec<String>, QueryError> {
        let Some(db) = &self.open else {
            return Ok(Vec::new());
        };

        let sql = format!("{} {}", db.projection, query::distinct_types_sql());
        let mut stmt = db.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;

        let mut types = Vec::new();
        while let Some(row) = rows.next()? {
            if let Value::Text(name) = row.get::<_, Value>(0)? {
                types.push(name);
            }
        }

        debug!(count = types.len(), "Listed document types");
        Ok(types)
    }

    /// Documents whose `type` equals `type_name`, narrowed by an optional raw
    /// filter fragment, ordered by id.
    ///
    /// Empty when no database is open. A malformed filter is an error, never
    /// an empty result. Rows with an empty id are skipped.
    pub fn query_by_type(
        &self,
        type_name: &str,
        filter: Option<&str>,
    ) -> Result<Vec<Document>, QueryError> {
        let Some(db) = &self.open else {
            return Ok(Vec::new());
        };

        let sql = format!("{} {}", db.projection, query::documents_by_type_sql(filter));
        debug!(type_name, filter = query::normalize_filter(filter), "Querying documents");

        let mut stmt = db.conn.prepare(&sql)?;
        let mut rows = stmt.query([type_name])?;

        let mut documents = Vec::new();
        while let Some(row) = rows.next()? {
            let id: String = row.get(0)?;
            if id.is_empty() {
                warn!(type_name, "Skipping document with an empty id");
                continue;
            }
            let body: Option<String> = row.get(1)?;
            let document = match body {
                Some(body) => Document::parse(id, &body)?,
                None => {
                    return Err(dbv_model::ModelError::InvalidBody {
                        id,
                        reason: "body is not valid JSON".to_string(),
                    }
                    .into());
                }
            };
            documents.push(document);
        }

        debug!(type_name, count = documents.len(), "Documents loaded");
        Ok(documents)
    }
}

impl Drop for DatabaseConnection {
    fn drop(&mut self) {
        self.close();
    }
}

fn load_projection(conn: &Connection) -> rusqlite::Result<String> {
    let mut stmt = conn.prepare(PROPERTY_KEYS_SQL)?;
    let keys = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    debug!(count = keys.len(), "Projected property keys");
    Ok(query::projection_sql(keys.iter().map(String::as_str)))
}
