//! GEDCOM import transaction
//!
//! One import is one logical transaction: parse the text, load the
//! current dataset, push a pre-mutation snapshot, reconcile, save.
//! Parsing never fails (lenient by design); only the I/O boundaries
//! (snapshot push, dataset save) surface errors. When a save fails the
//! merged result is discarded and the snapshot is the only durable side
//! effect, so the pre-import state stays recoverable.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::{reconcile, Dataset, ImportMode};
use crate::gedcom;
use crate::storage::Project;

/// Counts reported by a completed import
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ImportReport {
    /// People appended as new records
    pub added: usize,

    /// Existing records that had at least one field filled in
    pub updated: usize,
}

impl ImportReport {
    /// Total records the import wrote or touched
    pub fn total(&self) -> usize {
        self.added + self.updated
    }
}

/// Runs GEDCOM imports against a project's stores
pub struct Importer<'a> {
    project: &'a Project,
}

impl<'a> Importer<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    /// Imports GEDCOM text into the dataset.
    ///
    /// Zero parsed people is a successful import of zero records, not an
    /// error; callers decide whether that is acceptable.
    pub fn import(&self, text: &str, mode: ImportMode) -> Result<ImportReport> {
        let incoming = gedcom::parse(text);

        let data_store = self.project.data_store();
        let dataset = data_store.load();

        // Snapshot before any mutation so undo always has the prior state
        self.project
            .snapshot_store()
            .push(&dataset)
            .context("Failed to snapshot dataset before import")?;

        let Dataset {
            people,
            stories,
            photos,
            timeline,
        } = dataset;

        let outcome = reconcile(people, incoming, mode);
        let report = ImportReport {
            added: outcome.added,
            updated: outcome.updated,
        };

        let merged = Dataset {
            people: outcome.people,
            stories,
            photos,
            timeline,
        };

        data_store
            .save(&merged)
            .context("Failed to save imported dataset")?;

        Ok(report)
    }

    /// Restores the newest snapshot as the current dataset.
    /// Returns false when there is nothing to undo.
    pub fn undo(&self) -> Result<bool> {
        let Some(previous) = self.project.snapshot_store().pop()? else {
            return Ok(false);
        };

        self.project
            .data_store()
            .save(&previous)
            .context("Failed to restore snapshot")?;

        Ok(true)
    }
}
