//! GEDCOM line tokenizer
//!
//! Splits raw text into structured lines of the form
//! `<level> [<@xref@>] <TAG> [<value>]`. The format is treated as noisy:
//! lines that don't match the grammar are dropped, not reported. Tags are
//! matched case-insensitively and normalized to uppercase.

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s+(@[^@]+@)?\s*([A-Za-z0-9_]+)(?:\s+(.*))?$").unwrap());

/// One structurally valid GEDCOM line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// Nesting depth; 0 starts a top-level record
    pub level: usize,

    /// Cross-reference token including its `@` delimiters, when present
    pub xref: Option<String>,

    /// Uppercase tag (`INDI`, `NAME`, `BIRT`, ...)
    pub tag: String,

    /// Free text to end of line, trimmed; empty when absent
    pub value: String,
}

/// Tokenizes raw GEDCOM text into structured lines
///
/// Splits on `\n` or `\r\n`, skips blank lines, and silently drops
/// anything that doesn't match the line grammar.
pub fn tokenize(text: &str) -> Vec<RawLine> {
    text.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.trim().is_empty())
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<RawLine> {
    let caps = LINE_RE.captures(line)?;

    // Levels deep enough to overflow usize are garbage, not structure
    let level: usize = caps[1].parse().ok()?;

    Some(RawLine {
        level,
        xref: caps.get(2).map(|m| m.as_str().to_string()),
        tag: caps[3].to_uppercase(),
        value: caps
            .get(4)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_record_header() {
        let lines = tokenize("0 @I1@ INDI");

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, 0);
        assert_eq!(lines[0].xref.as_deref(), Some("@I1@"));
        assert_eq!(lines[0].tag, "INDI");
        assert_eq!(lines[0].value, "");
    }

    #[test]
    fn tokenizes_value_line() {
        let lines = tokenize("1 NAME John /Smith/");

        assert_eq!(lines[0].level, 1);
        assert_eq!(lines[0].xref, None);
        assert_eq!(lines[0].tag, "NAME");
        assert_eq!(lines[0].value, "John /Smith/");
    }

    #[test]
    fn xref_in_value_position_is_a_value() {
        let lines = tokenize("1 HUSB @I1@");

        assert_eq!(lines[0].tag, "HUSB");
        assert_eq!(lines[0].xref, None);
        assert_eq!(lines[0].value, "@I1@");
    }

    #[test]
    fn normalizes_tag_case() {
        let lines = tokenize("1 name John");
        assert_eq!(lines[0].tag, "NAME");
    }

    #[test]
    fn skips_blank_and_malformed_lines() {
        let text = "0 @I1@ INDI\n\n   \nthis is not gedcom\n???\n1 SEX M";
        let lines = tokenize(text);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].tag, "INDI");
        assert_eq!(lines[1].tag, "SEX");
    }

    #[test]
    fn handles_crlf_endings() {
        let lines = tokenize("0 @I1@ INDI\r\n1 SEX F\r\n");

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].value, "F");
    }

    #[test]
    fn trims_value_whitespace() {
        let lines = tokenize("2 DATE  3 JAN 1848  ");
        assert_eq!(lines[0].value, "3 JAN 1848");
    }

    #[test]
    fn rejects_missing_tag() {
        assert!(tokenize("1 @X@").is_empty());
        assert!(tokenize("NAME John").is_empty());
    }
}
