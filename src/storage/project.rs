//! Project management
//!
//! Handles project initialization and provides access to the stores.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::{Config, DataStore, SnapshotStore};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Not in a lineage project. Run 'lineage init' first.")]
    NotInProject,
}

/// A Lineage project
pub struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    /// Opens an existing project at the given path
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let lineage_dir = root.join(".lineage");

        if !lineage_dir.is_dir() {
            return Err(ProjectError::NotInProject.into());
        }

        let config = Config::for_project(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the project at the current directory or a parent
    pub fn open_current() -> Result<Self> {
        let root = Config::find_project_root().ok_or(ProjectError::NotInProject)?;

        Self::open(root)
    }

    /// Initializes a new project at the given path
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let lineage_dir = root.join(".lineage");

        fs::create_dir_all(&lineage_dir).with_context(|| {
            format!(
                "Failed to create .lineage directory: {}",
                lineage_dir.display()
            )
        })?;

        let snapshots_dir = lineage_dir.join("snapshots");
        fs::create_dir_all(&snapshots_dir).with_context(|| {
            format!(
                "Failed to create snapshots directory: {}",
                snapshots_dir.display()
            )
        })?;

        let config_path = lineage_dir.join("config.toml");
        if !config_path.exists() {
            let default_config = r#"# Lineage CLI configuration

# Undo snapshots kept before the oldest is discarded
snapshot_retention = 10

# Import mode when 'lineage import' is given no --mode (merge | replace)
default_import_mode = "merge"
"#;
            fs::write(&config_path, default_config)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        let gitignore_path = lineage_dir.join(".gitignore");
        if !gitignore_path.exists() {
            let gitignore = r#"# Undo snapshots are local working state
snapshots/
"#;
            fs::write(&gitignore_path, gitignore).with_context(|| {
                format!("Failed to write .gitignore: {}", gitignore_path.display())
            })?;
        }

        Self::open(root)
    }

    /// Returns the project root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the .lineage directory path
    pub fn lineage_dir(&self) -> PathBuf {
        self.root.join(".lineage")
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the dataset store
    pub fn data_store(&self) -> DataStore {
        DataStore::for_project(&self.root)
    }

    /// Returns the snapshot store, retention per config
    pub fn snapshot_store(&self) -> SnapshotStore {
        SnapshotStore::for_project(&self.root, self.config.project.snapshot_retention)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_creates_structure() {
        let dir = TempDir::new().unwrap();
        let project = Project::init(dir.path()).unwrap();

        assert!(project.lineage_dir().is_dir());
        assert!(project.lineage_dir().join("snapshots").is_dir());
        assert!(project.lineage_dir().join("config.toml").is_file());
        assert!(project.lineage_dir().join(".gitignore").is_file());
    }

    #[test]
    fn init_is_idempotent() {
        let dir = TempDir::new().unwrap();

        Project::init(dir.path()).unwrap();
        Project::init(dir.path()).unwrap(); // Should not fail

        assert!(dir.path().join(".lineage").is_dir());
    }

    #[test]
    fn open_existing_project() {
        let dir = TempDir::new().unwrap();
        Project::init(dir.path()).unwrap();

        let project = Project::open(dir.path()).unwrap();
        assert_eq!(project.root(), dir.path());
    }

    #[test]
    fn open_non_project_fails() {
        let dir = TempDir::new().unwrap();
        let result = Project::open(dir.path());

        assert!(result.is_err());
    }

    #[test]
    fn stores_are_accessible() {
        let dir = TempDir::new().unwrap();
        let project = Project::init(dir.path()).unwrap();

        assert!(project.data_store().path().ends_with("data.json"));
        assert!(project.snapshot_store().dir().ends_with("snapshots"));
    }

    #[test]
    fn default_config_parses() {
        let dir = TempDir::new().unwrap();
        let project = Project::init(dir.path()).unwrap();

        assert_eq!(project.config().project.snapshot_retention, 10);
    }
}
