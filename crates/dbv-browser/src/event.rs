//! Inputs to and outputs from the [`Coordinator`](crate::Coordinator).

use std::fmt;

use dbv_model::Document;

use crate::state::Notice;

/// Tag of one background request.
///
/// Ids are issued in increasing order by a single coordinator; a completion
/// is applied only when its id is the one the coordinator is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub(crate) fn first() -> Self {
        Self(1)
    }

    pub(crate) fn following(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Something that happened: a user intent or a finished request.
#[derive(Debug, Clone)]
pub enum Event {
    /// A database path was picked (`Some`) or the database was closed (`None`).
    PathChanged(Option<String>),
    /// A document type was chosen in the type list.
    TypeSelected(String),
    /// The filter text field was edited.
    FilterDraftChanged(String),
    /// The filter draft was committed.
    FilterSubmitted,
    /// A document was chosen by id.
    DocumentSelected(String),
    /// The detail view was left.
    DetailClosed,
    NextPage,
    PreviousPage,
    NoticeDismissed,
    /// The database was opened and its types listed, or the open failed.
    DatabaseOpened {
        request: RequestId,
        result: Result<Vec<String>, Notice>,
    },
    /// A documents query finished. The error is the message to show inline.
    DocumentsLoaded {
        request: RequestId,
        result: Result<Vec<Document>, String>,
    },
}

/// Work the coordinator asks its host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Close the database handle (idempotent).
    CloseDatabase,
    /// Close any open handle, open `path`, list its types, and report back
    /// with [`Event::DatabaseOpened`].
    OpenDatabase { request: RequestId, path: String },
    /// Query the documents of `type_name` and report back with
    /// [`Event::DocumentsLoaded`].
    LoadDocuments {
        request: RequestId,
        type_name: String,
        filter: Option<String>,
    },
    /// Persist `path` as the last opened database.
    RememberPath(String),
    /// Remove the persisted path.
    ForgetPath,
}
