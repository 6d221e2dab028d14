//! Document Store Viewer - Desktop GUI Application
//!
//! Browses the documents of an embedded document store by type, with an
//! optional WHERE-clause filter and a recursive property view.

use dbv_gui::App;
use dbv_gui::constants::{APP_NAME, APP_VERSION, WINDOW_MIN_SIZE, WINDOW_SIZE};
use iced::{Size, window};
use tracing_subscriber::EnvFilter;

/// Application entry point.
pub fn main() -> iced::Result {
    // RUST_LOG overrides the default level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(version = APP_VERSION, "Starting {APP_NAME}");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(WINDOW_SIZE.0, WINDOW_SIZE.1),
            min_size: Some(Size::new(WINDOW_MIN_SIZE.0, WINDOW_MIN_SIZE.1)),
            ..Default::default()
        })
        .run()
}
