//! Browser core of the document store viewer.
//!
//! - [`Coordinator`]: reducer from [`Event`]s to [`Effect`]s over a
//!   [`ViewState`]. It performs no I/O; the host runs the effects and feeds
//!   completions back as events.
//! - [`Pagination`]: page window over the loaded documents.
//! - [`render`]: document values to a toolkit-agnostic [`VisualNode`] tree.

mod coordinator;
mod event;
mod pagination;
pub mod render;
mod state;

pub use coordinator::Coordinator;
pub use event::{Effect, Event, RequestId};
pub use pagination::{PAGE_SIZE, Pagination};
pub use render::{ArrayItem, ObjectEntry, VisualNode, render, render_document};
pub use state::{ConnectionStatus, Notice, ViewState};
