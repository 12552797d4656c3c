//! User settings for Tally
//!
//! The only user preference is the display currency. Settings are restored
//! at startup and rewritten after every change; a missing or unreadable
//! settings file falls back to defaults rather than surfacing an error.

use serde::{Deserialize, Serialize};

use super::paths::TallyPaths;
use crate::error::TallyError;
use crate::models::Currency;

/// User settings for Tally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Selected display currency
    #[serde(default)]
    pub currency: Currency,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: Currency::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default(paths: &TallyPaths) -> Self {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Settings::default();
        }

        let contents = match std::fs::read_to_string(&settings_path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("failed to read settings file, using defaults: {}", e);
                return Settings::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("failed to parse settings file, using defaults: {}", e);
                Settings::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TallyPaths) -> Result<(), TallyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TallyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TallyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
