//! GEDCOM import command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::ImportMode;
use crate::import::Importer;
use crate::storage::Project;

pub fn run(output: &Output, file: &Path, mode: Option<&str>) -> Result<()> {
    let project = Project::open_current()?;

    let mode: ImportMode = match mode {
        Some(s) => s.parse()?,
        None => project.config().project.default_import_mode,
    };

    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read GEDCOM file: {}", file.display()))?;

    output.verbose_ctx(
        "import",
        &format!("Importing {} in {} mode", file.display(), mode),
    );

    let report = Importer::new(&project).import(&text, mode)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "added": report.added,
            "updated": report.updated,
            "mode": mode.as_str(),
        }));
    } else {
        output.success(&format!(
            "Imported {} new people, updated {} existing ({} mode)",
            report.added,
            report.updated,
            mode.as_str()
        ));
        if report.total() == 0 {
            println!("No INDI records found; dataset unchanged.");
        }
    }

    Ok(())
}
