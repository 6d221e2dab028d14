//! Effect runner - turns coordinator effects into iced tasks.

use dbv_browser::Effect;
use iced::Task;

use super::App;
use crate::message::Message;
use crate::service::database::{close_database, load_documents, open_database};

impl App {
    /// Run effects in the order the coordinator returned them.
    pub(super) fn run_effects(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = effects
            .into_iter()
            .map(|effect| self.run_effect(effect))
            .collect();
        Task::batch(tasks)
    }

    fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::CloseDatabase => {
                let ticket = self.database.issue_ticket();
                Task::perform(close_database(self.database.clone(), ticket), |()| {
                    Message::Noop
                })
            }

            Effect::OpenDatabase { request, path } => {
                let ticket = self.database.issue_ticket();
                Task::perform(
                    open_database(self.database.clone(), ticket, path),
                    move |result| match result {
                        Some(result) => Message::DatabaseOpened { request, result },
                        None => Message::Noop,
                    },
                )
            }

            Effect::LoadDocuments {
                request,
                type_name,
                filter,
            } => Task::perform(
                load_documents(self.database.clone(), type_name, filter),
                move |result| Message::DocumentsLoaded { request, result },
            ),

            Effect::RememberPath(path) => {
                self.settings.remember_database(path);
                self.persist_settings();
                Task::none()
            }

            Effect::ForgetPath => {
                self.settings.forget_database();
                self.persist_settings();
                Task::none()
            }
        }
    }

    fn persist_settings(&self) {
        if let Err(e) = self.settings.save() {
            tracing::error!(error = %e, "Failed to save settings");
        }
    }
}
