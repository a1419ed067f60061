//! Log-line parsers for the extraction stage.
//!
//! Deterministic line-by-line matching: a line either yields exactly one
//! record or nothing at all.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::DiagnosticRecord;
use crate::severity::Severity;

/// A line must start with this marker (after trimming) to be considered.
pub const LINE_PREFIX: &str = "Information:";

/// Code token, severity keyword, and trailing message, anywhere in the line.
static DIAGNOSTIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z0-9_]+-[0-9]+)\s+(INFO|WARNING|ERROR)\s+(.*)")
        .expect("diagnostic pattern is valid")
});

/// Parse one raw log line into a record.
///
/// The line qualifies only if, after trimming, it starts with
/// [`LINE_PREFIX`]; the code/severity/message triple may sit anywhere in
/// the remainder. Everything else returns None.
pub fn parse_log_line(line: &str) -> Option<DiagnosticRecord> {
    let line = line.trim();
    if !line.starts_with(LINE_PREFIX) {
        return None;
    }

    let caps = DIAGNOSTIC_RE.captures(line)?;
    let severity = Severity::from_keyword(&caps[2])?;
    Some(DiagnosticRecord::new(
        &caps[1],
        severity,
        caps[3].trim(),
    ))
}

/// Parse a whole log's text, silently dropping non-matching lines.
pub fn parse_log_text(text: &str) -> Vec<DiagnosticRecord> {
    text.lines().filter_map(parse_log_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matching_line() {
        let record = parse_log_line("Information: FC-100 ERROR something bad").unwrap();
        assert_eq!(record.code, "FC-100");
        assert_eq!(record.severity, Severity::Error);
        assert_eq!(record.message, "something bad");
        assert_eq!(
            record.to_row(),
            vec!["FC-100", "Error", "", "", "something bad", ""]
        );
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        let record = parse_log_line("   Information: OPT-12 WARNING net has no driver   ").unwrap();
        assert_eq!(record.code, "OPT-12");
        assert_eq!(record.severity, Severity::Warning);
        assert_eq!(record.message, "net has no driver");
    }

    #[test]
    fn test_parse_allows_text_between_prefix_and_code() {
        let record =
            parse_log_line("Information: elaborating block top; LINT-3 INFO checking nets")
                .unwrap();
        assert_eq!(record.code, "LINT-3");
        assert_eq!(record.severity, Severity::Info);
    }

    #[test]
    fn test_line_without_prefix_is_dropped() {
        assert!(parse_log_line("Warning: FC-100 ERROR something bad").is_none());
        assert!(parse_log_line("FC-100 ERROR something bad").is_none());
        assert!(parse_log_line("").is_none());
    }

    #[test]
    fn test_prefixed_line_without_triple_is_dropped() {
        assert!(parse_log_line("Information: starting compile").is_none());
        // Code token requires the hyphen-digits shape
        assert!(parse_log_line("Information: FC100 ERROR no hyphen").is_none());
        // Severity keyword must be one of the three exact words
        assert!(parse_log_line("Information: FC-100 FATAL something bad").is_none());
    }

    #[test]
    fn test_parse_log_text_keeps_only_matches() {
        let text = "\
Information: FC-100 ERROR something bad
random chatter
Information: compile started
Information: OPT-9 INFO all good
";
        let records = parse_log_text(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, "FC-100");
        assert_eq!(records[1].code, "OPT-9");
    }

    #[test]
    fn test_code_token_allows_underscores() {
        let record = parse_log_line("Information: PSYN_RPT-204 WARNING latch inferred").unwrap();
        assert_eq!(record.code, "PSYN_RPT-204");
    }
}
