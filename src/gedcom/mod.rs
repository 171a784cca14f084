//! # GEDCOM parser
//!
//! Lenient, line-oriented GEDCOM reader covering the INDI/FAM essentials:
//! name, sex, birth/death date and place, notes, parent and spouse links.
//!
//! Pipeline: [`tokenize`] splits text into structured lines,
//! [`build_records`] groups them into top-level records,
//! [`project_individual`]/[`project_family`] normalize each record, and
//! [`link`] resolves cross-references into flat [`Person`] values.
//!
//! The parser never fails: malformed lines are skipped, missing structure
//! becomes absent fields, and input with no records parses to an empty
//! list. Callers decide whether zero people is acceptable.

mod line;
mod record;
mod individual;
mod family;
mod link;

pub use line::{tokenize, RawLine};
pub use record::{build_records, Record, RecordKind};
pub use individual::{clean_name, extract_year, project_individual, EventDetail, Individual};
pub use family::{project_family, Family};
pub use link::link;

use crate::domain::Person;

/// Parses GEDCOM text into linked people, in source order
pub fn parse(text: &str) -> Vec<Person> {
    let records = build_records(tokenize(text));

    let individuals: Vec<Individual> = records
        .iter()
        .filter(|r| r.kind == RecordKind::Indi)
        .map(project_individual)
        .collect();

    let families: Vec<Family> = records
        .iter()
        .filter(|r| r.kind == RecordKind::Fam)
        .map(project_family)
        .collect();

    link(&individuals, &families)
}
