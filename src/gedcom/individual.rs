//! Individual projection
//!
//! Extracts a normalized `Individual` from an `INDI` record: name, sex,
//! birth/death blocks, notes, and family membership links. Also hosts the
//! two text heuristics the rest of the pipeline leans on: GEDCOM name
//! cleaning and year extraction from free-text dates.

use once_cell::sync::Lazy;
use regex::Regex;

use super::record::Record;

static SURNAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*/([^/]+)/").unwrap());
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"1[6-9]\d{2}|20\d{2}|21\d{2}").unwrap());

/// Used when an `INDI` record carries no usable `NAME` line
pub const UNKNOWN_NAME: &str = "(Unknown)";

/// Date and place of one life event (birth or death)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDetail {
    /// Free-text date as written in the source (`3 JAN 1848`, `ABT 1799`)
    pub date: Option<String>,
    pub place: Option<String>,
}

/// Intermediate single-person record, prior to ID assignment and link
/// resolution. `name` keeps the raw `Given /Surname/` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub xref: String,
    pub name: String,
    pub sex: Option<String>,
    pub birth: EventDetail,
    pub death: EventDetail,
    pub note: Option<String>,
    /// Families this person is a child in, encounter order
    pub famc: Vec<String>,
    /// Families this person is a spouse in, encounter order
    pub fams: Vec<String>,
}

/// Projects an `INDI` record into an `Individual`
pub fn project_individual(record: &Record) -> Individual {
    let notes: Vec<&str> = record
        .lines
        .iter()
        .filter(|l| l.tag == "NOTE")
        .map(|l| l.value.as_str())
        .collect();
    let note = Some(notes.join("\n")).filter(|n| !n.is_empty());

    Individual {
        xref: record.xref.clone(),
        name: record
            .last_value("NAME")
            .unwrap_or(UNKNOWN_NAME)
            .to_string(),
        sex: record.last_value("SEX").map(str::to_string),
        birth: event_block(record, "BIRT"),
        death: event_block(record, "DEAT"),
        note,
        famc: record.values("FAMC").map(str::to_string).collect(),
        fams: record.values("FAMS").map(str::to_string).collect(),
    }
}

/// Collects DATE/PLAC from the sub-lines nested under an event tag.
/// A sub-line belongs to the block while its level is strictly deeper
/// than the event line's; the first line at the same or a shallower level
/// ends the block. A repeated event tag resets the block (last one wins).
fn event_block(record: &Record, tag: &str) -> EventDetail {
    let mut detail = EventDetail::default();

    for (i, line) in record.lines.iter().enumerate() {
        if line.tag != tag {
            continue;
        }
        detail = EventDetail::default();
        for sub in &record.lines[i + 1..] {
            if sub.level <= line.level {
                break;
            }
            match sub.tag.as_str() {
                "DATE" if !sub.value.is_empty() => detail.date = Some(sub.value.clone()),
                "PLAC" if !sub.value.is_empty() => detail.place = Some(sub.value.clone()),
                _ => {}
            }
        }
    }

    detail
}

/// Rewrites the GEDCOM `Given /Surname/` convention to a display name:
/// every slash-delimited segment is joined with a single space
/// (`John /Smith/` -> `John Smith`). Names without slashes pass through
/// unchanged.
pub fn clean_name(raw: &str) -> String {
    SURNAME_RE.replace_all(raw, " $1").trim().to_string()
}

/// Extracts the first plausible year (1600-2199) from a free-text date.
/// Deliberately narrow: anything without such a run of digits has no year.
pub fn extract_year(date: &str) -> Option<i32> {
    YEAR_RE.find(date).and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::line::tokenize;
    use crate::gedcom::record::build_records;

    fn indi(text: &str) -> Individual {
        let records = build_records(tokenize(text));
        project_individual(&records[0])
    }

    #[test]
    fn projects_core_fields() {
        let ind = indi(
            "0 @I1@ INDI\n\
             1 NAME John /Smith/\n\
             1 SEX M\n\
             1 FAMC @F1@\n\
             1 FAMS @F2@",
        );

        assert_eq!(ind.xref, "@I1@");
        assert_eq!(ind.name, "John /Smith/");
        assert_eq!(ind.sex.as_deref(), Some("M"));
        assert_eq!(ind.famc, vec!["@F1@"]);
        assert_eq!(ind.fams, vec!["@F2@"]);
    }

    #[test]
    fn missing_name_yields_placeholder() {
        let ind = indi("0 @I1@ INDI\n1 SEX F");
        assert_eq!(ind.name, UNKNOWN_NAME);
    }

    #[test]
    fn birth_block_collects_nested_date_and_place() {
        let ind = indi(
            "0 @I1@ INDI\n\
             1 BIRT\n\
             2 DATE 3 JAN 1848\n\
             2 PLAC Kingston, Jamaica\n\
             1 DEAT\n\
             2 DATE 1901",
        );

        assert_eq!(ind.birth.date.as_deref(), Some("3 JAN 1848"));
        assert_eq!(ind.birth.place.as_deref(), Some("Kingston, Jamaica"));
        assert_eq!(ind.death.date.as_deref(), Some("1901"));
        assert_eq!(ind.death.place, None);
    }

    #[test]
    fn event_block_ends_at_sibling_level() {
        let ind = indi(
            "0 @I1@ INDI\n\
             1 BIRT\n\
             2 DATE 1848\n\
             1 DEAT\n\
             2 PLAC Boston",
        );

        // DEAT's PLAC must not bleed into the birth block
        assert_eq!(ind.birth.place, None);
        assert_eq!(ind.death.place.as_deref(), Some("Boston"));
    }

    #[test]
    fn deeper_nesting_still_belongs_to_block() {
        let ind = indi(
            "0 @I1@ INDI\n\
             1 BIRT\n\
             2 SOUR census\n\
             3 PAGE 12\n\
             2 DATE 1848",
        );

        assert_eq!(ind.birth.date.as_deref(), Some("1848"));
    }

    #[test]
    fn repeated_event_last_block_wins() {
        let ind = indi(
            "0 @I1@ INDI\n\
             1 BIRT\n\
             2 DATE 1848\n\
             1 BIRT\n\
             2 PLAC Boston",
        );

        assert_eq!(ind.birth.date, None);
        assert_eq!(ind.birth.place.as_deref(), Some("Boston"));
    }

    #[test]
    fn notes_accumulate_newline_joined() {
        let ind = indi("0 @I1@ INDI\n1 NOTE Family historian.\n1 NOTE Emigrated 1921.");
        assert_eq!(
            ind.note.as_deref(),
            Some("Family historian.\nEmigrated 1921.")
        );
    }

    #[test]
    fn absent_notes_stay_none() {
        let ind = indi("0 @I1@ INDI\n1 SEX M");
        assert_eq!(ind.note, None);
    }

    #[test]
    fn cleans_surname_slashes() {
        assert_eq!(clean_name("John /Smith/"), "John Smith");
        assert_eq!(
            clean_name("Mary Ann /Jones Walker/"),
            "Mary Ann Jones Walker"
        );
    }

    #[test]
    fn name_without_slashes_passes_through() {
        assert_eq!(clean_name("Cher"), "Cher");
    }

    #[test]
    fn cleans_multiple_slash_segments() {
        assert_eq!(clean_name("Anna /Maria/ /Lopez/"), "Anna Maria Lopez");
    }

    #[test]
    fn surname_only_name_has_no_leading_space() {
        assert_eq!(clean_name("/Smith/"), "Smith");
    }

    #[test]
    fn extracts_years_from_free_text() {
        assert_eq!(extract_year("3 JAN 1848"), Some(1848));
        assert_eq!(extract_year("ABT 1799"), Some(1799));
        assert_eq!(extract_year("BET 2001 AND 2003"), Some(2001));
        assert_eq!(extract_year("unknown"), None);
    }

    #[test]
    fn year_range_is_bounded() {
        assert_eq!(extract_year("1599"), None);
        assert_eq!(extract_year("1600"), Some(1600));
        assert_eq!(extract_year("2199"), Some(2199));
        assert_eq!(extract_year("2200"), None);
    }
}
