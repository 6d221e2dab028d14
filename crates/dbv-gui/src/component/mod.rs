//! Reusable UI components for the document store viewer.
//!
//! - **List items**: `SelectableRow`
//! - **Feedback**: `Placeholder`
//! - **Navigation**: `pagination_bar`
//! - **Display**: `property_tree`
//!
//! Components use the builder pattern and return `Element<M>`.

mod pagination_bar;
mod placeholder;
mod property_tree;
mod selectable_row;

pub use pagination_bar::pagination_bar;
pub use placeholder::Placeholder;
pub use property_tree::property_tree;
pub use selectable_row::SelectableRow;
