//! JSON file snapshot source.

use super::{prepare_snapshot, SnapshotError, SnapshotSource};
use crate::domain::Snapshot;
use std::path::PathBuf;

/// Reads a snapshot from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for FileSnapshotSource {
    fn load(&self) -> Result<Snapshot, SnapshotError> {
        let content = std::fs::read_to_string(&self.path)?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            pairs = snapshot.catalog.len(),
            banks = snapshot.banks.len(),
            universe = snapshot.universe.len(),
            "loaded snapshot"
        );
        prepare_snapshot(snapshot)
    }
}
