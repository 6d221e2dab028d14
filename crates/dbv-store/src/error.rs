//! Store error types.
//!
//! Errors carry enough context to build a user-facing message and an optional
//! remediation hint.

use std::path::PathBuf;

use dbv_model::ModelError;
use thiserror::Error;

/// Failure to open a database location.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The path does not name a database (empty last segment).
    #[error("Invalid database location: {path:?}")]
    InvalidLocation { path: String },

    /// The location directory is missing and could not be created.
    #[error("Failed to create database directory: {path}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The engine refused to open the database file.
    #[error("Failed to open database: {path}")]
    Sqlite {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The file exists but is not a database (corrupt or wrong format).
    #[error("Not a valid database: {path}")]
    NotADatabase {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The background worker running the open did not finish.
    #[error("Database worker failed: {reason}")]
    Worker { reason: String },
}

impl OpenError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidLocation { path } => {
                format!("'{path}' does not name a database.")
            }
            Self::CreateDirectory { path, source } => {
                format!(
                    "Could not create the database directory {}: {source}",
                    path.display()
                )
            }
            Self::Sqlite { path, source } => {
                format!("Could not open the database at {}: {source}", path.display())
            }
            Self::NotADatabase { path, .. } => {
                format!(
                    "The location {} does not contain a valid database.",
                    path.display()
                )
            }
            Self::Worker { reason } => {
                format!("The database could not be opened: {reason}")
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidLocation { .. } => Some("Pick a database directory, not a drive root."),
            Self::CreateDirectory { .. } => {
                Some("Check that you have write permission for the parent directory.")
            }
            Self::Sqlite { .. } => Some("Check that the file is not locked by another program."),
            Self::NotADatabase { .. } => {
                Some("The database may be corrupted. Try opening a backup copy.")
            }
            Self::Worker { .. } => None,
        }
    }
}

/// Failure while querying an open database.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The engine rejected or failed the query, typically a malformed filter.
    #[error("Query failed: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// A stored body could not be turned into a document.
    #[error(transparent)]
    MalformedDocument(#[from] ModelError),

    /// The background worker running the query did not finish.
    #[error("Query worker failed: {reason}")]
    Worker { reason: String },
}

impl QueryError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Sqlite { source } => match source {
                rusqlite::Error::SqliteFailure(_, Some(message)) => {
                    format!("Query failed: {message}")
                }
                other => format!("Query failed: {other}"),
            },
            Self::MalformedDocument(e) => e.to_string(),
            Self::Worker { reason } => format!("The query did not complete: {reason}"),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Sqlite { .. } => Some("Check the filter expression, e.g. age > 30."),
            Self::MalformedDocument(_) => None,
            Self::Worker { .. } => None,
        }
    }
}
