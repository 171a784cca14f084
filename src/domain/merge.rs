//! Reconciliation of imported people into an existing dataset
//!
//! Two strategies: `Replace` discards the prior people list wholesale
//! (callers snapshot first), `Merge` folds incoming people into existing
//! ones keyed on identity (lowercased trimmed name + birth year). Merge
//! fills only fields that are currently unset; existing values are never
//! overwritten. Notes are the exception: both sides are kept, newline
//! joined, with exact repeats skipped so that re-merging the same batch
//! changes nothing.
//!
//! Known limitation, preserved on purpose: two distinct people sharing a
//! name and birth year produce the same identity key and fold into one
//! record. The same applies to slug collisions from the parser.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::person::Person;

/// How an imported batch is combined with the existing people list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportMode {
    /// Discard all existing people; the batch becomes the dataset
    Replace,
    /// Fold the batch into existing people by identity key
    #[default]
    Merge,
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown import mode '{0}' (expected 'merge' or 'replace')")]
pub struct ParseModeError(String);

impl ImportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportMode::Replace => "replace",
            ImportMode::Merge => "merge",
        }
    }
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "replace" => Ok(ImportMode::Replace),
            "merge" => Ok(ImportMode::Merge),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Result of reconciling a batch into an existing people list
#[derive(Debug)]
pub struct MergeOutcome {
    /// The reconciled people list
    pub people: Vec<Person>,

    /// How many people were appended as new records
    pub added: usize,

    /// How many existing records had at least one field filled in
    pub updated: usize,
}

/// Identity key for merge matching: lowercased trimmed name + birth year
fn identity_key(person: &Person) -> String {
    let birth = person.birth.map(|y| y.to_string()).unwrap_or_default();
    format!("{}{}", person.name.trim().to_lowercase(), birth)
}

/// Reconciles an imported batch into the existing people list
pub fn reconcile(existing: Vec<Person>, incoming: Vec<Person>, mode: ImportMode) -> MergeOutcome {
    match mode {
        ImportMode::Replace => MergeOutcome {
            added: incoming.len(),
            updated: 0,
            people: incoming,
        },
        ImportMode::Merge => merge_by_identity(existing, incoming),
    }
}

fn merge_by_identity(existing: Vec<Person>, incoming: Vec<Person>) -> MergeOutcome {
    let mut people = existing;
    let mut index: HashMap<String, usize> = people
        .iter()
        .enumerate()
        .map(|(i, p)| (identity_key(p), i))
        .collect();

    let mut added = 0;
    let mut updated = 0;

    for person in incoming {
        let key = identity_key(&person);
        match index.get(&key) {
            Some(&i) => {
                if fill_unset(&mut people[i], &person) {
                    updated += 1;
                }
            }
            None => {
                index.insert(key, people.len());
                people.push(person);
                added += 1;
            }
        }
    }

    MergeOutcome {
        people,
        added,
        updated,
    }
}

/// Copies incoming values into fields the existing record leaves unset.
/// Returns whether anything changed.
fn fill_unset(existing: &mut Person, incoming: &Person) -> bool {
    let mut changed = false;

    macro_rules! fill {
        ($field:ident) => {
            if existing.$field.is_none() && incoming.$field.is_some() {
                existing.$field = incoming.$field.clone();
                changed = true;
            }
        };
    }

    fill!(death);
    fill!(birthplace);
    fill!(father);
    fill!(mother);
    fill!(spouse);

    if let Some(notes) = incoming.notes.as_deref().filter(|n| !n.is_empty()) {
        match &mut existing.notes {
            None => {
                existing.notes = Some(notes.to_string());
                changed = true;
            }
            Some(current) if !contains_note_block(current, notes) => {
                current.push('\n');
                current.push_str(notes);
                changed = true;
            }
            _ => {}
        }
    }

    changed
}

/// True if `notes` already contains `block` as a whole newline-delimited
/// segment. Keeps repeated merges of the same batch from duplicating notes.
fn contains_note_block(notes: &str, block: &str) -> bool {
    notes == block
        || notes.strip_prefix(block).is_some_and(|r| r.starts_with('\n'))
        || notes.strip_suffix(block).is_some_and(|r| r.ends_with('\n'))
        || notes.contains(&format!("\n{}\n", block))
}
