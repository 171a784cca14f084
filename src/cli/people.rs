//! People listing and display commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::domain::{Person, PersonId};
use crate::storage::Project;

#[derive(Subcommand)]
pub enum PeopleCommands {
    /// List all people in the dataset
    List,

    /// Show one person with resolved relationships
    Show {
        /// Person ID (slug)
        id: String,
    },
}

pub fn run(cmd: PeopleCommands, output: &Output) -> Result<()> {
    match cmd {
        PeopleCommands::List => list(output),
        PeopleCommands::Show { id } => show(output, &id),
    }
}

fn list(output: &Output) -> Result<()> {
    let project = Project::open_current()?;
    let dataset = project.data_store().load();

    if output.is_json() {
        output.data(&dataset.people);
    } else if dataset.people.is_empty() {
        println!("No people yet. Import a GEDCOM file with 'lineage import'.");
    } else {
        println!("{:<28} {:<6} {:<6} NAME", "ID", "BIRTH", "DEATH");
        println!("{}", "-".repeat(70));
        for person in &dataset.people {
            println!(
                "{:<28} {:<6} {:<6} {}",
                person.id,
                person.birth.map(|y| y.to_string()).unwrap_or_default(),
                person.death.map(|y| y.to_string()).unwrap_or_default(),
                person.name
            );
        }
        println!();
        println!("{} people", dataset.people.len());
    }

    Ok(())
}

fn show(output: &Output, id_str: &str) -> Result<()> {
    let project = Project::open_current()?;
    let dataset = project.data_store().load();

    let id = PersonId::from(id_str);
    let person = dataset
        .person(&id)
        .ok_or_else(|| anyhow::anyhow!("Person not found: {}", id_str))?;

    if output.is_json() {
        output.data(person);
    } else {
        render_person(person);
    }

    Ok(())
}

fn render_person(person: &Person) {
    println!("{} ({})", person.name, person.id);

    let years = match (person.birth, person.death) {
        (Some(b), Some(d)) => format!("{} - {}", b, d),
        (Some(b), None) => format!("b. {}", b),
        (None, Some(d)) => format!("d. {}", d),
        (None, None) => String::new(),
    };
    if !years.is_empty() {
        println!("  {}", years);
    }
    if let Some(place) = &person.birthplace {
        println!("  Born in {}", place);
    }
    if let Some(father) = &person.father {
        println!("  Father: {}", father);
    }
    if let Some(mother) = &person.mother {
        println!("  Mother: {}", mother);
    }
    if let Some(spouse) = &person.spouse {
        println!("  Spouse: {}", spouse);
    }
    if let Some(notes) = &person.notes {
        println!();
        println!("{}", notes);
    }
}
