//! # Storage Layer
//!
//! Persistence layer for Lineage CLI with git-friendly file formats.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Dataset | JSON document | `.lineage/data.json` |
//! | Snapshots | JSON documents | `.lineage/snapshots/{seq}-{time}.json` |
//! | Config | TOML | `.lineage/config.toml` |
//!
//! ## Failure Posture
//!
//! - [`DataStore::load`] never fails fatally: unreadable content degrades
//!   to the default empty dataset
//! - Dataset writes are atomic (temp file + rename) under an `fs2` lock
//! - Snapshot history is bounded; the oldest snapshot is discarded first
//!
//! ## Project Structure
//!
//! ```text
//! .lineage/
//! ├── data.json             # The family dataset
//! ├── snapshots/            # Undo history (ignored by git)
//! │   └── 000001-20260806T101530Z.json
//! ├── config.toml           # Project configuration
//! └── .gitignore            # Ignores snapshots
//! ```

mod config;
mod dataset;
mod project;
mod snapshot;

pub use config::{Config, ConfigError, GlobalConfig, OutputFormat, ProjectConfig};
pub use dataset::DataStore;
pub use project::{Project, ProjectError};
pub use snapshot::SnapshotStore;
