//! Undo and status commands

use anyhow::Result;

use super::output::Output;
use crate::import::Importer;
use crate::storage::Project;

pub fn undo(output: &Output) -> Result<()> {
    let project = Project::open_current()?;
    let restored = Importer::new(&project).undo()?;

    if output.is_json() {
        output.data(&serde_json::json!({ "restored": restored }));
    } else if restored {
        output.success("Restored the previous dataset");
    } else {
        output.success("Nothing to undo");
    }

    Ok(())
}

pub fn status(output: &Output) -> Result<()> {
    let project = Project::open_current()?;
    let dataset = project.data_store().load();
    let snapshots = project.snapshot_store().count()?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "root": project.root().display().to_string(),
            "people": dataset.people.len(),
            "stories": dataset.stories.len(),
            "photos": dataset.photos.len(),
            "timeline": dataset.timeline.len(),
            "snapshots": snapshots,
        }));
    } else {
        println!("Project: {}", project.root().display());
        println!("Dataset: {}", project.data_store().path().display());
        println!();
        println!("  People:   {}", dataset.people.len());
        println!("  Stories:  {}", dataset.stories.len());
        println!("  Photos:   {}", dataset.photos.len());
        println!("  Timeline: {}", dataset.timeline.len());
        println!();
        println!("Undo snapshots: {}", snapshots);
    }

    Ok(())
}
