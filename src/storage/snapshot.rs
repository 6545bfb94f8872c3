//! Onboarding snapshot store
//!
//! The whole `OnboardingRecord` lives in one JSON file. Reads never fail: a
//! missing file means a fresh session, and an unreadable one is discarded in
//! favour of defaults.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::OnboardResult;
use crate::models::OnboardingRecord;

use super::file_io::{read_json, remove_if_exists, write_json_atomic};

/// Reads and replaces the persisted onboarding snapshot
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, falling back to a fresh record
    pub fn load(&self) -> OnboardingRecord {
        match read_json::<OnboardingRecord, _>(&self.path) {
            Ok(Some(record)) => {
                debug!(path = %self.path.display(), step = %record.step, "loaded snapshot");
                record
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "no snapshot, starting fresh");
                OnboardingRecord::default()
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unreadable snapshot");
                OnboardingRecord::default()
            }
        }
    }

    /// Replace the snapshot with `record`
    pub fn save(&self, record: &OnboardingRecord) -> OnboardResult<()> {
        write_json_atomic(&self.path, record)?;
        debug!(path = %self.path.display(), step = %record.step, "saved snapshot");
        Ok(())
    }

    /// Delete the snapshot. Returns whether one existed.
    pub fn clear(&self) -> OnboardResult<bool> {
        let removed = remove_if_exists(&self.path)?;
        debug!(path = %self.path.display(), removed, "cleared snapshot");
        Ok(removed)
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
