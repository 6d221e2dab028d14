//! Event reducer that keeps the view state consistent.
//!
//! Two derived pieces of state are kept in sync with their inputs:
//!
//! - the database and its type list follow `path`;
//! - the document list follows the pair `(selected_type, filter_text)`.
//!
//! Each re-runs only when its key actually changes. Downstream state is
//! cleared synchronously before the request is handed to the host, so the
//! view never shows data from a previous key while a new one loads.
//! Completions carry the [`RequestId`] they answer and are dropped unless it
//! is the pending one.

use dbv_model::Document;
use tracing::{debug, info, warn};

use crate::event::{Effect, Event, RequestId};
use crate::render::render_document;
use crate::state::{ConnectionStatus, ViewState};

type DocumentsKey = (Option<String>, String);

/// Owns the [`ViewState`] and turns events into effects.
#[derive(Debug)]
pub struct Coordinator {
    state: ViewState,
    next_request: RequestId,
    pending_open: Option<RequestId>,
    pending_documents: Option<RequestId>,
}

impl Coordinator {
    /// Start with the persisted path (if any) and the effects needed to
    /// reach it.
    pub fn new(initial_path: Option<String>) -> (Self, Vec<Effect>) {
        let mut coordinator = Self {
            state: ViewState {
                path: initial_path,
                ..ViewState::default()
            },
            next_request: RequestId::first(),
            pending_open: None,
            pending_documents: None,
        };
        let effects = coordinator.run_path_effect();
        (coordinator, effects)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Request currently awaited for the open, if any.
    pub fn pending_open(&self) -> Option<RequestId> {
        self.pending_open
    }

    /// Request currently awaited for the document list, if any.
    pub fn pending_documents(&self) -> Option<RequestId> {
        self.pending_documents
    }

    /// Apply one event and return the effects the host must run, in order.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::PathChanged(path) => self.set_path(path),

            Event::TypeSelected(type_name) => {
                if !self.state.is_open() {
                    debug!(type_name = %type_name, "Type selected while closed, ignoring");
                    return Vec::new();
                }
                let previous = self.documents_key();
                self.state.selected_type = Some(type_name);
                self.state.filter_text.clear();
                self.state.filter_draft.clear();
                self.refresh_documents(previous)
            }

            Event::FilterDraftChanged(text) => {
                self.state.filter_draft = text;
                Vec::new()
            }

            Event::FilterSubmitted => {
                let previous = self.documents_key();
                self.state.filter_text = self.state.filter_draft.clone();
                self.refresh_documents(previous)
            }

            Event::DocumentSelected(id) => {
                match self.state.documents.iter().find(|d| d.id() == id) {
                    Some(document) => {
                        debug!(
                            id = %id,
                            depth = document.depth(),
                            outline = %render_document(document).outline(),
                            "Document selected"
                        );
                        self.state.selected_document = Some(document.clone());
                    }
                    None => debug!(id = %id, "Selected document is not in the current list"),
                }
                Vec::new()
            }

            Event::DetailClosed => {
                self.state.selected_document = None;
                Vec::new()
            }

            Event::NextPage => {
                let total = self.state.documents.len();
                self.state.pagination.next(total);
                Vec::new()
            }

            Event::PreviousPage => {
                self.state.pagination.previous();
                Vec::new()
            }

            Event::NoticeDismissed => {
                self.state.notice = None;
                Vec::new()
            }

            Event::DatabaseOpened { request, result } => {
                if self.pending_open != Some(request) {
                    debug!(%request, "Discarding superseded open result");
                    return Vec::new();
                }
                self.pending_open = None;

                match result {
                    Ok(types) => {
                        let Some(path) = self.state.path.clone() else {
                            return Vec::new();
                        };
                        info!(path = %path, types = types.len(), "Database ready");
                        self.state.connection = ConnectionStatus::Open;
                        self.state.document_types = types;
                        vec![Effect::RememberPath(path)]
                    }
                    Err(notice) => {
                        warn!(error = %notice.message, "Failed to open database");
                        self.state.notice = Some(notice);
                        self.set_path(None)
                    }
                }
            }

            Event::DocumentsLoaded { request, result } => {
                if self.pending_documents != Some(request) {
                    debug!(%request, "Discarding superseded documents result");
                    return Vec::new();
                }
                self.pending_documents = None;
                self.state.documents_loading = false;

                match result {
                    Ok(documents) => {
                        debug!(
                            count = documents.len(),
                            max_depth = documents.iter().map(Document::depth).max(),
                            "Documents applied"
                        );
                        self.state.documents = documents;
                        self.state.pagination.reset();
                    }
                    Err(message) => {
                        warn!(error = %message, "Documents query failed");
                        self.state.query_error = Some(message);
                    }
                }
                Vec::new()
            }
        }
    }

    fn set_path(&mut self, path: Option<String>) -> Vec<Effect> {
        if self.state.path == path {
            return Vec::new();
        }
        if path.is_some() {
            self.state.notice = None;
        }
        self.state.path = path;
        self.run_path_effect()
    }

    /// Effect keyed on `path`.
    fn run_path_effect(&mut self) -> Vec<Effect> {
        self.pending_open = None;
        self.state.document_types.clear();

        let previous = self.documents_key();
        self.state.selected_type = None;
        self.state.filter_text.clear();
        self.state.filter_draft.clear();
        let mut effects = self.refresh_documents(previous);

        match self.state.path.clone() {
            None => {
                info!("Database closed");
                self.state.connection = ConnectionStatus::Closed;
                effects.push(Effect::CloseDatabase);
                effects.push(Effect::ForgetPath);
            }
            Some(path) => {
                let request = self.issue_request();
                info!(path = %path, %request, "Opening database");
                self.state.connection = ConnectionStatus::Opening;
                self.pending_open = Some(request);
                effects.push(Effect::OpenDatabase { request, path });
            }
        }
        effects
    }

    fn documents_key(&self) -> DocumentsKey {
        (
            self.state.selected_type.clone(),
            self.state.filter_text.clone(),
        )
    }

    fn refresh_documents(&mut self, previous: DocumentsKey) -> Vec<Effect> {
        if self.documents_key() == previous {
            return Vec::new();
        }
        self.run_documents_effect()
    }

    /// Effect keyed on `(selected_type, filter_text)`.
    fn run_documents_effect(&mut self) -> Vec<Effect> {
        self.pending_documents = None;
        self.state.selected_document = None;
        self.state.documents.clear();
        self.state.query_error = None;
        self.state.documents_loading = false;
        self.state.pagination.reset();

        let Some(type_name) = self.state.selected_type.clone() else {
            return Vec::new();
        };
        let filter = Some(self.state.filter_text.clone()).filter(|f| !f.trim().is_empty());
        let request = self.issue_request();
        debug!(type_name = %type_name, ?filter, %request, "Loading documents");

        self.pending_documents = Some(request);
        self.state.documents_loading = true;
        vec![Effect::LoadDocuments {
            request,
            type_name,
            filter,
        }]
    }

    fn issue_request(&mut self) -> RequestId {
        let request = self.next_request;
        self.next_request = request.following();
        request
    }
}
