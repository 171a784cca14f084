//! Dataset document storage
//!
//! The whole dataset lives in `.lineage/data.json`, one pretty-printed
//! JSON document. Loading never fails fatally: a missing or unreadable
//! file yields the default empty dataset, so a corrupted document
//! degrades to a fresh start instead of wedging every command. Writes go
//! through a temp file and rename under an exclusive lock.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::Dataset;

/// Store for the dataset JSON document
pub struct DataStore {
    path: PathBuf,
}

impl DataStore {
    /// Creates a store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the default store for a project
    pub fn for_project(project_root: &Path) -> Self {
        Self::new(project_root.join(".lineage").join("data.json"))
    }

    /// Returns the path to the document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the dataset. Missing or unparseable content yields the
    /// default dataset rather than an error.
    pub fn load(&self) -> Dataset {
        let mut file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return Dataset::default(),
        };

        // Shared lock so a concurrent save can't be read half-written
        if file.lock_shared().is_err() {
            return Dataset::default();
        }

        let mut content = String::new();
        if file.read_to_string(&mut content).is_err() {
            return Dataset::default();
        }

        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Saves the dataset atomically (temp file + rename)
    pub fn save(&self, dataset: &Dataset) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let temp_path = self.path.with_extension("json.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on dataset")?;

            let mut writer = BufWriter::new(&file);
            let json = serde_json::to_string_pretty(dataset).context("Failed to serialize dataset")?;
            writer
                .write_all(json.as_bytes())
                .context("Failed to write dataset")?;
            writer.write_all(b"\n").context("Failed to write dataset")?;
            writer.flush().context("Failed to flush dataset")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}
