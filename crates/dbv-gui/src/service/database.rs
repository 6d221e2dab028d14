//! Database service - runs store operations off the UI thread.
//!
//! The single [`DatabaseConnection`] lives behind a mutex shared by all
//! tasks. Lifecycle tasks (open and close) carry a ticket; a task whose
//! ticket is no longer the latest when it gets the lock does nothing, so a
//! slow open can never reopen a database the user has since closed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use dbv_model::Document;
use dbv_store::{DatabaseConnection, OpenError, QueryError};
use tracing::{debug, warn};

use crate::error::GuiError;

/// Shared handle to the one database connection.
#[derive(Debug, Clone, Default)]
pub struct DatabaseHandle {
    inner: Arc<Shared>,
}

#[derive(Debug, Default)]
struct Shared {
    connection: Mutex<DatabaseConnection>,
    lifecycle: AtomicU64,
}

/// Claim to perform the next open or close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl DatabaseHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket, superseding every earlier one.
    pub fn issue_ticket(&self) -> Ticket {
        Ticket(self.inner.lifecycle.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        self.inner.lifecycle.load(Ordering::SeqCst) == ticket.0
    }

    fn lock(&self) -> MutexGuard<'_, DatabaseConnection> {
        // A panic inside a store call leaves the connection in a usable state.
        self.inner
            .connection
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Close any open database, open `path`, and list its types.
///
/// Returns `None` when the ticket was superseded before the open ran.
///
/// This function is designed to be used with `Task::perform`:
///
/// ```ignore
/// Task::perform(
///     open_database(handle, ticket, path),
///     move |result| Message::DatabaseOpened { request, result },
/// )
/// ```
pub async fn open_database(
    handle: DatabaseHandle,
    ticket: Ticket,
    path: String,
) -> Option<Result<Vec<String>, GuiError>> {
    let error_path = path.clone();
    tokio::task::spawn_blocking(move || open_database_sync(&handle, ticket, &path))
        .await
        .unwrap_or_else(|e| {
            Some(Err(OpenError::Worker {
                reason: format!("Task panicked: {e}"),
            }))
        })
        .map(|result| result.map_err(|e| GuiError::database_open(error_path, &e)))
}

fn open_database_sync(
    handle: &DatabaseHandle,
    ticket: Ticket,
    path: &str,
) -> Option<Result<Vec<String>, OpenError>> {
    let mut db = handle.lock();
    if !handle.is_current(ticket) {
        debug!(path, "Open superseded before it started");
        return None;
    }

    if let Err(e) = db.open(path) {
        return Some(Err(e));
    }
    match db.list_types() {
        Ok(types) => Some(Ok(types)),
        Err(e) => {
            warn!(path, error = %e, "Listing document types failed");
            db.close();
            Some(Err(OpenError::Worker {
                reason: e.user_message(),
            }))
        }
    }
}

/// Close the database if this is still the latest lifecycle request.
pub async fn close_database(handle: DatabaseHandle, ticket: Ticket) {
    let result = tokio::task::spawn_blocking(move || {
        let mut db = handle.lock();
        if handle.is_current(ticket) {
            db.close();
        }
    })
    .await;
    if let Err(e) = result {
        warn!(error = %e, "Close task failed");
    }
}

/// Query documents of one type.
pub async fn load_documents(
    handle: DatabaseHandle,
    type_name: String,
    filter: Option<String>,
) -> Result<Vec<Document>, GuiError> {
    tokio::task::spawn_blocking(move || {
        handle
            .lock()
            .query_by_type(&type_name, filter.as_deref())
    })
    .await
    .unwrap_or_else(|e| {
        Err(QueryError::Worker {
            reason: format!("Task panicked: {e}"),
        })
    })
    .map_err(|e| GuiError::query(&e))
}
