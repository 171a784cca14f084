//! Lineage CLI - A local-first family history tool
//!
//! Lineage keeps a family dataset (people, stories, photos, timeline) in a
//! single JSON document and imports GEDCOM files into it. Imports are
//! snapshot-protected, so the pre-import dataset is always one `undo` away.

pub mod domain;
pub mod gedcom;
pub mod import;
pub mod storage;
pub mod cli;

pub use domain::{Dataset, ImportMode, Person, PersonId};
pub use import::{ImportReport, Importer};
