//! Document Store Viewer - GUI Library
//!
//! Application types and modules for the desktop viewer. Built with Iced
//! 0.14.0 using the Elm architecture; browsing logic lives in `dbv-browser`.

pub mod app;
pub mod component;
pub mod constants;
pub mod error;
pub mod message;
pub mod service;
pub mod settings;
pub mod theme;
pub mod view;

pub use app::App;
