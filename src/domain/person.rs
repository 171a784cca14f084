//! Person and dataset models
//!
//! A `Person` is the flattened, application-facing record: relationship
//! fields hold resolved slug IDs rather than GEDCOM cross-references.
//! The `Dataset` is the single JSON document the CLI owns; stories, photos
//! and timeline entries are opaque collections passed through untouched.

use serde::{Deserialize, Serialize};

use super::slug::PersonId;

/// A single person in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Slug ID, derived from the display name
    pub id: PersonId,

    /// Cleaned display name (GEDCOM surname slashes stripped)
    pub name: String,

    /// Birth year, when one could be extracted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth: Option<i32>,

    /// Death year, when one could be extracted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<String>,

    /// ID of the father, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father: Option<PersonId>,

    /// ID of the mother, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother: Option<PersonId>,

    /// ID of the (first) spouse, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse: Option<PersonId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Person {
    /// Creates a person with only an ID and display name
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            birth: None,
            death: None,
            birthplace: None,
            father: None,
            mother: None,
            spouse: None,
            notes: None,
        }
    }
}

/// The whole family dataset, persisted as one JSON document
///
/// Only `people` is edited by the import pipeline. The other collections
/// belong to the surrounding site and round-trip through load/save as raw
/// JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub people: Vec<Person>,
    pub stories: Vec<serde_json::Value>,
    pub photos: Vec<serde_json::Value>,
    pub timeline: Vec<serde_json::Value>,
}

impl Dataset {
    /// Looks up a person by ID
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| &p.id == id)
    }
}
