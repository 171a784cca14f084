//! Cross-reference resolution
//!
//! Turns projected individuals and families into the flat `Person` model:
//! every xref is mapped to a derived slug ID, parents come from the first
//! family the person is a child in, the spouse from the first family they
//! are a partner in. Dangling or malformed references leave fields unset;
//! nothing here errors.

use std::collections::HashMap;

use crate::domain::{Person, PersonId};

use super::family::Family;
use super::individual::{clean_name, extract_year, Individual};

/// Resolves individuals and families into linked people.
/// Output order follows the individuals' encounter order.
pub fn link(individuals: &[Individual], families: &[Family]) -> Vec<Person> {
    let family_by_xref: HashMap<&str, &Family> =
        families.iter().map(|f| (f.xref.as_str(), f)).collect();

    // xref -> derived id, in encounter order. Distinct individuals whose
    // names normalize to the same slug share an id; tolerated downstream.
    let id_by_xref: HashMap<&str, PersonId> = individuals
        .iter()
        .map(|ind| {
            let name = clean_name(&ind.name);
            (ind.xref.as_str(), PersonId::derive(&name, &ind.xref))
        })
        .collect();

    individuals
        .iter()
        .map(|ind| {
            let mut person = Person::new(id_by_xref[ind.xref.as_str()].clone(), clean_name(&ind.name));
            person.birth = ind.birth.date.as_deref().and_then(extract_year);
            person.death = ind.death.date.as_deref().and_then(extract_year);
            person.birthplace = ind.birth.place.clone();
            person.notes = ind.note.clone();

            if let Some(family) = ind.famc.first().and_then(|x| family_by_xref.get(x.as_str())) {
                person.father = resolve(&id_by_xref, family.husb.as_deref());
                person.mother = resolve(&id_by_xref, family.wife.as_deref());
            }

            if let Some(family) = ind.fams.first().and_then(|x| family_by_xref.get(x.as_str())) {
                person.spouse = resolve(&id_by_xref, spouse_of(family, &ind.xref));
            }

            person
        })
        .collect()
}

/// The partner in a family that is not the given individual. `None` when
/// the individual appears as neither spouse of its own claimed family.
fn spouse_of<'a>(family: &'a Family, own_xref: &str) -> Option<&'a str> {
    if family.husb.as_deref() == Some(own_xref) {
        family.wife.as_deref()
    } else if family.wife.as_deref() == Some(own_xref) {
        family.husb.as_deref()
    } else {
        None
    }
}

fn resolve(id_by_xref: &HashMap<&str, PersonId>, xref: Option<&str>) -> Option<PersonId> {
    xref.and_then(|x| id_by_xref.get(x)).cloned()
}
