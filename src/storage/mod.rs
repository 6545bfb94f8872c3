//! Storage layer for onboard-cli
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The only persisted state is the onboarding snapshot.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json, remove_if_exists, write_json_atomic};
pub use snapshot::SnapshotStore;

use crate::config::paths::OnboardPaths;
use crate::error::OnboardError;

/// Create the snapshot store for a base directory
pub fn open_snapshot_store(paths: &OnboardPaths) -> Result<SnapshotStore, OnboardError> {
    paths.ensure_directories()?;
    Ok(SnapshotStore::new(paths.snapshot_file()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = open_snapshot_store(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(store.path(), paths.snapshot_file());
        assert!(!store.exists());
    }
}
