//! Family projection
//!
//! A `FAM` record pairs up to two spouses with their children, all by
//! cross-reference. Single pass: repeated `HUSB`/`WIFE` lines overwrite
//! (last wins), `CHIL` lines append.

use super::record::Record;

/// Intermediate family record: spouse pair plus children, by xref
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Family {
    pub xref: String,
    pub husb: Option<String>,
    pub wife: Option<String>,
    /// Children xrefs in encounter order
    pub children: Vec<String>,
}

/// Projects a `FAM` record into a `Family`
pub fn project_family(record: &Record) -> Family {
    Family {
        xref: record.xref.clone(),
        husb: record.last_value("HUSB").map(str::to_string),
        wife: record.last_value("WIFE").map(str::to_string),
        children: record.values("CHIL").map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::line::tokenize;
    use crate::gedcom::record::build_records;

    fn fam(text: &str) -> Family {
        let records = build_records(tokenize(text));
        project_family(&records[0])
    }

    #[test]
    fn projects_spouses_and_children() {
        let family = fam(
            "0 @F1@ FAM\n\
             1 HUSB @I1@\n\
             1 WIFE @I2@\n\
             1 CHIL @I3@\n\
             1 CHIL @I4@",
        );

        assert_eq!(family.xref, "@F1@");
        assert_eq!(family.husb.as_deref(), Some("@I1@"));
        assert_eq!(family.wife.as_deref(), Some("@I2@"));
        assert_eq!(family.children, vec!["@I3@", "@I4@"]);
    }

    #[test]
    fn repeated_spouse_lines_last_wins() {
        let family = fam("0 @F1@ FAM\n1 HUSB @I1@\n1 HUSB @I9@");
        assert_eq!(family.husb.as_deref(), Some("@I9@"));
    }

    #[test]
    fn missing_spouses_stay_unset() {
        let family = fam("0 @F1@ FAM\n1 CHIL @I3@");
        assert_eq!(family.husb, None);
        assert_eq!(family.wife, None);
    }
}
