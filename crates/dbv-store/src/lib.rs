//! Embedded document store binding.
//!
//! A database is a directory `<name>.docdb` holding a SQLite file with one
//! `documents(id, body)` table, where `body` is a JSON object. The
//! [`DatabaseConnection`] owns at most one open database and answers the two
//! read queries the viewer needs: the distinct document types and the
//! documents of one type, optionally narrowed by a raw filter fragment.

mod connection;
mod error;
mod location;
pub mod query;
mod schema;

pub use connection::DatabaseConnection;
pub use error::{OpenError, QueryError};
pub use location::{DATABASE_EXTENSION, DATABASE_FILE, DatabaseLocation};
