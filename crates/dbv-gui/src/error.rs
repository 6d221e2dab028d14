//! GUI-specific error types.
//!
//! Errors crossing the message boundary must be `Clone`, so store errors are
//! flattened into their user-facing text here.

use dbv_browser::Notice;
use dbv_store::{OpenError, QueryError};
use thiserror::Error;

/// GUI-level errors shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuiError {
    // =========================================================================
    // DATABASE OPERATIONS
    // =========================================================================
    /// The selected database could not be opened.
    #[error("{reason}")]
    DatabaseOpen {
        /// Path that was picked.
        path: String,
        /// User-facing description.
        reason: String,
        /// Remediation hint from the store.
        hint: Option<&'static str>,
    },

    /// A documents query failed.
    #[error("{reason}")]
    Query {
        /// User-facing description, including the engine message.
        reason: String,
    },

    // =========================================================================
    // SETTINGS
    // =========================================================================
    /// Settings could not be written.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::DatabaseOpen { hint, .. } => *hint,
            Self::Query { .. } => None,
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
        }
    }

    /// Banner content for this error.
    pub fn notice(&self) -> Notice {
        let notice = Notice::new(self.to_string());
        match self.suggestion() {
            Some(hint) => notice.with_suggestion(hint),
            None => notice,
        }
    }

    // =========================================================================
    // FACTORY METHODS
    // =========================================================================

    /// Create a database open error from a store error.
    pub fn database_open(path: impl Into<String>, err: &OpenError) -> Self {
        Self::DatabaseOpen {
            path: path.into(),
            reason: err.user_message(),
            hint: err.suggestion(),
        }
    }

    /// Create a query error from a store error.
    pub fn query(err: &QueryError) -> Self {
        Self::Query {
            reason: err.user_message(),
        }
    }

    /// Create a settings save error.
    pub fn settings_save(err: impl std::fmt::Display) -> Self {
        Self::SettingsSave {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_becomes_notice_with_hint() {
        let err = GuiError::database_open(
            "/srv/",
            &OpenError::InvalidLocation {
                path: "/srv/".into(),
            },
        );
        let notice = err.notice();
        assert!(notice.message.contains("/srv/"));
        assert!(notice.suggestion.is_some());
    }

    #[test]
    fn worker_failure_has_no_hint() {
        let err = GuiError::database_open(
            "/srv/db",
            &OpenError::Worker {
                reason: "task panicked".into(),
            },
        );
        assert_eq!(err.suggestion(), None);
        assert!(err.to_string().contains("task panicked"));
    }
}
