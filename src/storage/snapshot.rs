//! Snapshot storage for undo
//!
//! Every import pushes the pre-import dataset here before mutating
//! anything, so `lineage undo` can always restore the previous state.
//! Snapshots are whole dataset documents under `.lineage/snapshots/`,
//! named `{sequence}-{capture-time}.json`. History is bounded: pushing
//! beyond the retention count discards the oldest snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use crate::domain::Dataset;

/// Bounded LIFO store of dataset snapshots
pub struct SnapshotStore {
    dir: PathBuf,
    retention: usize,
}

impl SnapshotStore {
    /// Creates a store over the given directory
    pub fn new(dir: impl Into<PathBuf>, retention: usize) -> Self {
        Self {
            dir: dir.into(),
            retention: retention.max(1),
        }
    }

    /// Creates the default store for a project
    pub fn for_project(project_root: &Path, retention: usize) -> Self {
        Self::new(
            project_root.join(".lineage").join("snapshots"),
            retention,
        )
    }

    /// Returns the snapshot directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Snapshot files as (sequence, path), oldest first
    fn entries(&self) -> Result<Vec<(u64, PathBuf)>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read directory: {}", self.dir.display()))?
        {
            let path = entry.context("Failed to read directory entry")?.path();
            if path.extension().is_some_and(|e| e == "json") {
                if let Some(seq) = sequence_of(&path) {
                    entries.push((seq, path));
                }
            }
        }

        entries.sort_by_key(|(seq, _)| *seq);
        Ok(entries)
    }

    /// Number of snapshots currently retained
    pub fn count(&self) -> Result<usize> {
        Ok(self.entries()?.len())
    }

    /// Pushes a snapshot, discarding the oldest beyond the retention count
    pub fn push(&self, dataset: &Dataset) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory: {}", self.dir.display()))?;

        let entries = self.entries()?;
        let next = entries.last().map(|(seq, _)| seq + 1).unwrap_or(1);

        let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
        let path = self.dir.join(format!("{:06}-{}.json", next, stamp));

        let json = serde_json::to_string_pretty(dataset).context("Failed to serialize snapshot")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;

        // entries is pre-push; one slot is already taken by the new file
        let excess = (entries.len() + 1).saturating_sub(self.retention);
        for (_, old) in entries.into_iter().take(excess) {
            fs::remove_file(&old)
                .with_context(|| format!("Failed to remove snapshot: {}", old.display()))?;
        }

        Ok(())
    }

    /// Removes and returns the newest snapshot, if any
    pub fn pop(&self) -> Result<Option<Dataset>> {
        let entries = self.entries()?;
        let Some((_, path)) = entries.last() else {
            return Ok(None);
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
        let dataset: Dataset = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot: {}", path.display()))?;

        fs::remove_file(path)
            .with_context(|| format!("Failed to remove snapshot: {}", path.display()))?;

        Ok(Some(dataset))
    }
}

/// Leading decimal sequence of a snapshot file name
fn sequence_of(path: &Path) -> Option<u64> {
    let name = path.file_stem()?.to_str()?;
    let digits: String = name.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
