//! Path management for onboard-cli
//!
//! ## Path Resolution Order
//!
//! 1. `ONBOARD_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/onboard-cli`
//! 3. Otherwise the platform config directory joined with `onboard-cli`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::OnboardError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "ONBOARD_CLI_DATA_DIR";

/// Fixed storage key of the onboarding snapshot
pub const SNAPSHOT_KEY: &str = "onboarding_snapshot_v1";

const APP_DIR_NAME: &str = "onboard-cli";

/// Manages all paths used by onboard-cli
#[derive(Debug, Clone)]
pub struct OnboardPaths {
    /// Base directory for all onboard-cli data
    base_dir: PathBuf,
}

impl OnboardPaths {
    /// Create a new OnboardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, OnboardError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create OnboardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the onboarding snapshot
    pub fn snapshot_file(&self) -> PathBuf {
        self.data_dir().join(format!("{}.json", SNAPSHOT_KEY))
    }

    /// Get the path to the audit journal
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the diagnostic log
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("onboard.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), OnboardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| OnboardError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| OnboardError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default base directory for this platform
fn resolve_default_path() -> Result<PathBuf, OnboardError> {
    if cfg!(not(windows)) {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            if !xdg.trim().is_empty() {
                return Ok(PathBuf::from(xdg).join(APP_DIR_NAME));
            }
        }
    }

    BaseDirs::new()
        .map(|dirs| dirs.config_dir().join(APP_DIR_NAME))
        .ok_or_else(|| OnboardError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.snapshot_file(),
            temp_dir
                .path()
                .join("data")
                .join("onboarding_snapshot_v1.json")
        );
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }
}
