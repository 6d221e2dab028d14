//! Observable state of the browser.

use dbv_model::Document;

use crate::pagination::Pagination;

/// Lifecycle of the database handle as seen by the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Closed,
    /// An open request is in flight.
    Opening,
    Open,
}

/// Dismissible message shown above the panes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub suggestion: Option<String>,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Everything the view renders.
///
/// Only the [`Coordinator`](crate::Coordinator) mutates this; the view reads
/// it through [`Coordinator::state`](crate::Coordinator::state).
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Configured database location. `None` means closed.
    pub path: Option<String>,
    pub connection: ConnectionStatus,
    /// Distinct `type` values of the open database, ascending.
    pub document_types: Vec<String>,
    pub selected_type: Option<String>,
    /// Filter applied to the current query. Empty means none.
    pub filter_text: String,
    /// Content of the filter field, applied on submit.
    pub filter_draft: String,
    /// Result of the latest query for `(selected_type, filter_text)`.
    pub documents: Vec<Document>,
    /// Always an element of `documents` when set.
    pub selected_document: Option<Document>,
    pub pagination: Pagination,
    pub documents_loading: bool,
    /// Failure of the latest query, shown instead of an empty list.
    pub query_error: Option<String>,
    pub notice: Option<Notice>,
}

impl ViewState {
    pub fn is_open(&self) -> bool {
        self.connection == ConnectionStatus::Open
    }

    /// Documents on the current page.
    pub fn visible_documents(&self) -> &[Document] {
        &self.documents[self.pagination.window(self.documents.len())]
    }
}
