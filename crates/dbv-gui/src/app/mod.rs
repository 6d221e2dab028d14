//! Main application module for the document store viewer.
//!
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! - **All state changes happen in the coordinator** - `update()` only
//!   translates messages into events and runs the returned effects.
//! - **Views are pure functions** of the coordinator's `ViewState`.
//! - **No channels/polling** - database work uses `Task::perform`.

mod effects;

use dbv_browser::{Coordinator, Event};
use dbv_store::DatabaseLocation;
use iced::{Element, Task, Theme};

use crate::constants::APP_NAME;
use crate::message::Message;
use crate::service::database::DatabaseHandle;
use crate::settings::Settings;
use crate::theme::viewer_theme;
use crate::view::view_main;

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
pub struct App {
    coordinator: Coordinator,
    settings: Settings,
    database: DatabaseHandle,
}

impl App {
    /// Create a new application instance.
    ///
    /// Settings are read once here; the stored path seeds the coordinator.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let initial_path = settings.last_database_path().map(str::to_string);
        tracing::info!(path = ?initial_path, "Restoring last database");

        let (coordinator, effects) = Coordinator::new(initial_path);
        let mut app = Self {
            coordinator,
            settings,
            database: DatabaseHandle::new(),
        };
        let startup = app.run_effects(effects);
        (app, startup)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::OpenDatabaseClicked = message {
            return pick_database_folder();
        }
        let Some(event) = to_event(message) else {
            return Task::none();
        };
        let effects = self.coordinator.handle(event);
        self.run_effects(effects)
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        view_main(self.coordinator.state(), &self.settings.display)
    }

    /// Window title, naming the open database.
    pub fn title(&self) -> String {
        let name = self
            .coordinator
            .state()
            .path
            .as_deref()
            .and_then(|path| DatabaseLocation::parse(path).ok());
        match name {
            Some(location) => format!("{} - {APP_NAME}", location.name()),
            None => APP_NAME.to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        viewer_theme()
    }
}

/// Translate a message into a coordinator event.
///
/// `None` for messages that change nothing (cancelled picker, no-op).
fn to_event(message: Message) -> Option<Event> {
    let event = match message {
        Message::OpenDatabaseClicked | Message::Noop => return None,
        Message::DatabaseFolderSelected(path) => {
            Event::PathChanged(Some(path?.to_string_lossy().into_owned()))
        }
        Message::CloseDatabaseClicked => Event::PathChanged(None),
        Message::DismissNotice => Event::NoticeDismissed,
        Message::TypeSelected(type_name) => Event::TypeSelected(type_name),
        Message::FilterChanged(text) => Event::FilterDraftChanged(text),
        Message::FilterSubmitted => Event::FilterSubmitted,
        Message::DocumentSelected(id) => Event::DocumentSelected(id),
        Message::BackToList => Event::DetailClosed,
        Message::NextPage => Event::NextPage,
        Message::PreviousPage => Event::PreviousPage,
        Message::DatabaseOpened { request, result } => Event::DatabaseOpened {
            request,
            result: result.map_err(|e| e.notice()),
        },
        Message::DocumentsLoaded { request, result } => Event::DocumentsLoaded {
            request,
            result: result.map_err(|e| e.to_string()),
        },
    };
    Some(event)
}

// =============================================================================
// FOLDER PICKER
// =============================================================================

#[cfg(target_os = "macos")]
fn pick_database_folder() -> Task<Message> {
    let path = rfd::FileDialog::new()
        .set_title("Select Database Directory")
        .pick_folder();
    Task::done(Message::DatabaseFolderSelected(path))
}

#[cfg(not(target_os = "macos"))]
fn pick_database_folder() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_title("Select Database Directory")
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::DatabaseFolderSelected,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::error::GuiError;

    #[test]
    fn cancelled_picker_changes_nothing() {
        assert!(to_event(Message::DatabaseFolderSelected(None)).is_none());
        assert!(to_event(Message::Noop).is_none());
    }

    #[test]
    fn picked_folder_becomes_path() {
        let event = to_event(Message::DatabaseFolderSelected(Some(PathBuf::from(
            "/data/app.docdb",
        ))));
        assert!(matches!(
            event,
            Some(Event::PathChanged(Some(ref p))) if p == "/data/app.docdb"
        ));
    }

    #[test]
    fn close_clears_path() {
        assert!(matches!(
            to_event(Message::CloseDatabaseClicked),
            Some(Event::PathChanged(None))
        ));
    }

    #[test]
    fn query_failure_keeps_engine_text() {
        let (mut coordinator, effects) = Coordinator::new(Some("/data/app.docdb".into()));
        let Some(dbv_browser::Effect::OpenDatabase { request, .. }) = effects.first().cloned()
        else {
            panic!("expected open effect");
        };
        coordinator.handle(Event::DatabaseOpened {
            request,
            result: Ok(vec!["user".into()]),
        });
        let effects = coordinator.handle(Event::TypeSelected("user".into()));
        let Some(dbv_browser::Effect::LoadDocuments { request, .. }) = effects.first().cloned()
        else {
            panic!("expected load effect");
        };

        let event = to_event(Message::DocumentsLoaded {
            request,
            result: Err(GuiError::Query {
                reason: "Query failed: no such column: agee".into(),
            }),
        })
        .unwrap();
        coordinator.handle(event);

        assert_eq!(
            coordinator.state().query_error.as_deref(),
            Some("Query failed: no such column: agee")
        );
    }
}
