//! Application identity constants.
//!
//! Centralized constants for application metadata used across the codebase.

/// Application display name.
pub const APP_NAME: &str = "Document Store Viewer";

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reverse-domain qualifier used for the config directory.
pub const APP_QUALIFIER: &str = "org";

/// Organization used for the config directory.
pub const APP_ORGANIZATION: &str = "DocumentStoreViewer";

/// Application name used for the config directory.
pub const APP_DIR_NAME: &str = "dbv";

/// Initial window size (width, height).
pub const WINDOW_SIZE: (f32, f32) = (1200.0, 800.0);

/// Smallest usable window size (width, height).
pub const WINDOW_MIN_SIZE: (f32, f32) = (800.0, 500.0);
