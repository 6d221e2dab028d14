//! Message module for the document store viewer.
//!
//! All user interactions and background completions are represented as
//! variants of [`Message`]. `App::update` translates them into coordinator
//! events.

use std::path::PathBuf;

use dbv_browser::RequestId;
use dbv_model::Document;

use crate::error::GuiError;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Toolbar
    // =========================================================================
    /// "Open DB" was clicked; show the folder picker.
    OpenDatabaseClicked,

    /// The folder picker returned. `None` means cancelled.
    DatabaseFolderSelected(Option<PathBuf>),

    /// "Close DB" was clicked.
    CloseDatabaseClicked,

    /// The notice banner was dismissed.
    DismissNotice,

    // =========================================================================
    // Browsing
    // =========================================================================
    /// A document type was clicked in the left pane.
    TypeSelected(String),

    /// The WHERE-clause field was edited.
    FilterChanged(String),

    /// "Filter" was clicked or Enter pressed in the WHERE-clause field.
    FilterSubmitted,

    /// A document id was clicked.
    DocumentSelected(String),

    /// "Back to list" was clicked.
    BackToList,

    NextPage,
    PreviousPage,

    // =========================================================================
    // Background task results
    // =========================================================================
    /// Database open (and type listing) completed.
    DatabaseOpened {
        request: RequestId,
        result: Result<Vec<String>, GuiError>,
    },

    /// Documents query completed.
    DocumentsLoaded {
        request: RequestId,
        result: Result<Vec<Document>, GuiError>,
    },

    /// No-op message for tasks with nothing to report.
    Noop,
}
