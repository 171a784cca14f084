//! Top-level record grouping
//!
//! A record starts at a level-0 line carrying a cross-reference and a
//! recognized tag (`INDI` or `FAM`); every following line with level > 0
//! belongs to it. Any level-0 line is a record boundary: an unrecognized
//! one (`HEAD`, `TRLR`, `SUBM`, ...) starts no record, so its sub-lines
//! are discarded along with it.

use super::line::RawLine;

/// Kind of top-level record the parser keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Indi,
    Fam,
}

impl RecordKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "INDI" => Some(RecordKind::Indi),
            "FAM" => Some(RecordKind::Fam),
            _ => None,
        }
    }
}

/// A top-level record with its nested sub-lines, in source order
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Cross-reference token, delimiters included (`@I1@`)
    pub xref: String,

    pub kind: RecordKind,

    /// Sub-lines in encounter order, levels preserved
    pub lines: Vec<RawLine>,
}

impl Record {
    /// Last value for a tag, skipping empty values. Matches the simple
    /// overwrite semantics of single-pass assignment (`NAME`, `SEX`,
    /// `HUSB`, `WIFE`).
    pub fn last_value(&self, tag: &str) -> Option<&str> {
        self.lines
            .iter()
            .rev()
            .find(|l| l.tag == tag && !l.value.is_empty())
            .map(|l| l.value.as_str())
    }

    /// All non-empty values for a tag, in encounter order (`FAMC`,
    /// `FAMS`, `CHIL`).
    pub fn values<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a str> {
        self.lines
            .iter()
            .filter(move |l| l.tag == tag && !l.value.is_empty())
            .map(|l| l.value.as_str())
    }
}

/// Groups tokenized lines into INDI/FAM records
pub fn build_records(lines: Vec<RawLine>) -> Vec<Record> {
    let mut records = Vec::new();
    let mut current: Option<Record> = None;

    for line in lines {
        if line.level == 0 {
            if let Some(rec) = current.take() {
                records.push(rec);
            }
            current = match (&line.xref, RecordKind::from_tag(&line.tag)) {
                (Some(xref), Some(kind)) => Some(Record {
                    xref: xref.clone(),
                    kind,
                    lines: Vec::new(),
                }),
                _ => None,
            };
        } else if let Some(rec) = current.as_mut() {
            rec.lines.push(line);
        }
        // Lines before any record starts fall through and are dropped
    }

    if let Some(rec) = current {
        records.push(rec);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::line::tokenize;

    fn records(text: &str) -> Vec<Record> {
        build_records(tokenize(text))
    }

    #[test]
    fn groups_sublines_under_record() {
        let recs = records("0 @I1@ INDI\n1 NAME John /Smith/\n1 SEX M");

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].xref, "@I1@");
        assert_eq!(recs[0].kind, RecordKind::Indi);
        assert_eq!(recs[0].lines.len(), 2);
    }

    #[test]
    fn new_record_closes_previous() {
        let recs = records("0 @I1@ INDI\n1 SEX M\n0 @F1@ FAM\n1 HUSB @I1@");

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].lines.len(), 1);
        assert_eq!(recs[1].kind, RecordKind::Fam);
        assert_eq!(recs[1].lines.len(), 1);
    }

    #[test]
    fn discards_lines_before_first_record() {
        let recs = records("1 SOUR ancestry\n2 VERS 1.0\n0 @I1@ INDI\n1 SEX F");

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].lines.len(), 1);
    }

    #[test]
    fn unrecognized_top_level_starts_no_record() {
        let recs = records("0 HEAD\n1 CHAR UTF-8\n0 @I1@ INDI\n1 SEX M\n0 TRLR");

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].xref, "@I1@");
        assert_eq!(recs[0].lines.len(), 1);
    }

    #[test]
    fn unrecognized_top_level_discards_its_sublines() {
        let recs = records("0 @I1@ INDI\n1 SEX M\n0 @S1@ SOUR\n1 TITL census\n0 @I2@ INDI");

        assert_eq!(recs.len(), 2);
        // The SOUR record's TITL sub-line must not leak into @I1@
        assert_eq!(recs[0].lines.len(), 1);
        assert!(recs[1].lines.is_empty());
    }

    #[test]
    fn top_level_without_xref_starts_no_record() {
        let recs = records("0 INDI\n1 SEX M");
        assert!(recs.is_empty());
    }

    #[test]
    fn last_value_wins_and_skips_empty() {
        let recs = records("0 @I1@ INDI\n1 SEX M\n1 SEX F\n1 SEX");
        assert_eq!(recs[0].last_value("SEX"), Some("F"));
        assert_eq!(recs[0].last_value("NAME"), None);
    }

    #[test]
    fn values_preserve_encounter_order() {
        let recs = records("0 @I1@ INDI\n1 FAMC @F2@\n1 FAMC @F1@");
        let famc: Vec<_> = recs[0].values("FAMC").collect();
        assert_eq!(famc, vec!["@F2@", "@F1@"]);
    }
}
