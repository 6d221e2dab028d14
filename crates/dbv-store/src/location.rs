//! Database location parsing.
//!
//! A location is a path whose last segment is the logical database name,
//! optionally suffixed with [`DATABASE_EXTENSION`].

use std::path::{PathBuf, is_separator};

use crate::error::OpenError;

/// Extension of a database directory on disk.
pub const DATABASE_EXTENSION: &str = "docdb";

/// SQLite file inside a database directory.
pub const DATABASE_FILE: &str = "db.sqlite3";

/// Directory and logical name derived from a user-supplied path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseLocation {
    directory: String,
    name: String,
}

impl DatabaseLocation {
    /// Split `path` at its final separator.
    ///
    /// `directory` is everything before the separator (empty when there is
    /// none, or when the separator is the first character). `name` is the last
    /// segment with a trailing `.docdb` removed.
    pub fn parse(path: &str) -> Result<Self, OpenError> {
        let (directory, segment) = match path.rfind(is_separator) {
            Some(idx) => (&path[..idx], &path[idx + 1..]),
            None => ("", path),
        };

        let name = segment
            .strip_suffix(DATABASE_EXTENSION)
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or(segment);

        if name.is_empty() {
            return Err(OpenError::InvalidLocation {
                path: path.to_string(),
            });
        }

        Ok(Self {
            directory: directory.to_string(),
            name: name.to_string(),
        })
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Database directory on disk: `<directory>/<name>.docdb`.
    ///
    /// An empty directory resolves against the working directory.
    pub fn root(&self) -> PathBuf {
        let base = if self.directory.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&self.directory)
        };
        base.join(format!("{}.{DATABASE_EXTENSION}", self.name))
    }

    /// SQLite file inside [`Self::root`].
    pub fn database_file(&self) -> PathBuf {
        self.root().join(DATABASE_FILE)
    }
}
