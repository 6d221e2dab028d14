//! Persisted user settings.
//!
//! Stored as TOML in the platform config directory. Missing or unreadable
//! files fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{APP_DIR_NAME, APP_ORGANIZATION, APP_QUALIFIER};
use crate::error::GuiError;

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// General application settings.
    pub general: GeneralSettings,

    /// Display settings.
    pub display: DisplaySettings,
}

impl Settings {
    /// Load settings from the default location.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable settings");
            Self::default()
        })
    }

    /// Save settings to the default location.
    pub fn save(&self) -> Result<(), GuiError> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GuiError::settings_save)?;
        }

        let content = toml::to_string_pretty(self).map_err(GuiError::settings_save)?;
        std::fs::write(path, content).map_err(GuiError::settings_save)
    }

    /// Default settings file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_DIR_NAME)
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Path of the last successfully opened database.
    pub fn last_database_path(&self) -> Option<&str> {
        self.general.last_database_path.as_deref()
    }

    /// Remember a successfully opened database.
    pub fn remember_database(&mut self, path: impl Into<String>) {
        self.general.last_database_path = Some(path.into());
    }

    /// Forget the last database.
    pub fn forget_database(&mut self) {
        self.general.last_database_path = None;
    }
}

/// General settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Database restored at startup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_database_path: Option<String>,
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Width of the key column in the property view, in pixels.
    pub property_key_width: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            property_key_width: 180.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&dir.path().join("absent.toml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.display.property_key_width, 180.0);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "general = [this is not toml").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn remembered_path_survives_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.remember_database("/data/app.docdb");
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.last_database_path(), Some("/data/app.docdb"));
    }

    #[test]
    fn forgotten_path_is_not_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");

        let mut settings = Settings::default();
        settings.remember_database("/data/app.docdb");
        settings.forget_database();
        settings.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("last_database_path"));
        assert_eq!(Settings::load_from(&path).last_database_path(), None);
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[display]\nproperty_key_width = 240.0\n").unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.display.property_key_width, 240.0);
        assert_eq!(settings.last_database_path(), None);
    }
}
