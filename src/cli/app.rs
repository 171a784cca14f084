//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{history, import_cmd, people};
use crate::storage::{Config, Project};

#[derive(Parser)]
#[command(name = "lineage")]
#[command(author, version, about = "Local-first family history with GEDCOM import")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to `default_format` from the global config)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new lineage project
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Import a GEDCOM file into the dataset
    Import {
        /// Path to the .ged file
        file: std::path::PathBuf,

        /// Reconciliation mode (merge or replace; default from config)
        #[arg(long)]
        mode: Option<String>,
    },

    /// Browse people in the dataset
    #[command(subcommand)]
    People(people::PeopleCommands),

    /// Restore the dataset to its newest snapshot
    Undo,

    /// Show dataset overview
    Status,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let format = match cli.format {
        Some(format) => format,
        None => Config::load_global()?.default_format.into(),
    };
    let output = Output::new(format, cli.verbose);

    match cli.command {
        Commands::Init { path } => {
            output.verbose_ctx("init", &format!("Initializing project at: {}", path));
            let project = Project::init(&path)?;
            output.success(&format!(
                "Initialized lineage project at {}",
                project.root().display()
            ));
        }

        Commands::Import { file, mode } => import_cmd::run(&output, &file, mode.as_deref())?,

        Commands::People(cmd) => people::run(cmd, &output)?,

        Commands::Undo => {
            output.verbose("Restoring newest snapshot");
            history::undo(&output)?
        }

        Commands::Status => history::status(&output)?,
    }

    Ok(())
}
