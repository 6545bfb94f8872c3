//! User settings for onboard-cli
//!
//! Display and logging preferences. Missing keys fall back to defaults so an
//! older config file keeps loading.

use serde::{Deserialize, Serialize};

use super::paths::OnboardPaths;
use crate::error::OnboardError;

/// User settings for onboard-cli
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Timestamp format for "last saved" and submission times (strftime)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// TUI redraw tick in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Default tracing filter when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Hide all but the last four characters of the tax ID on review screens
    #[serde(default = "default_mask_tax_id")]
    pub mask_tax_id: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_mask_tax_id() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            tick_rate_ms: default_tick_rate_ms(),
            log_filter: default_log_filter(),
            mask_tax_id: default_mask_tax_id(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &OnboardPaths) -> Result<Self, OnboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                OnboardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                OnboardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OnboardPaths) -> Result<(), OnboardError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            OnboardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            OnboardError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
