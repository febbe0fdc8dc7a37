//! Application settings persistence
//!
//! Handles saving and loading user preferences. Any failure while loading
//! falls back to defaults; the tribute must come up regardless.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Fixed soundtrack volume carried over from the original site
pub const SOUNDTRACK_VOLUME: f32 = 0.3;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Soundtrack volume (0.0 to 1.0)
    pub volume: f32,
    /// Whether the soundtrack starts muted
    pub muted: bool,
    /// Suppress continuous animation frames to save power
    #[serde(default)]
    pub power_saving: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: SOUNDTRACK_VOLUME,
            muted: false,
            power_saving: false,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ismaelpaulino", "Endurance")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_site_behavior() {
        let settings = Settings::default();
        assert_eq!(settings.volume, SOUNDTRACK_VOLUME);
        assert!(!settings.muted);
        assert!(!settings.power_saving);
    }

    #[test]
    fn settings_round_trip_through_disk() {
        let dir = std::env::temp_dir().join("endurance-settings-test");
        let path = dir.join("settings.json");
        let settings = Settings {
            volume: 0.5,
            muted: true,
            power_saving: true,
        };
        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.volume, 0.5);
        assert!(loaded.muted);
        assert!(loaded.power_saving);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_power_saving_field_defaults_off() {
        let loaded: Settings = serde_json::from_str(r#"{"volume":0.3,"muted":false}"#).unwrap();
        assert!(!loaded.power_saving);
    }
}
