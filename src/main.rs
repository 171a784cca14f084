//! Lineage CLI - Local-first family history with GEDCOM import

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = lineage_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
