//! Cleaning and parsing of fc_shell man-page output.
//!
//! The shell's combined output interleaves prompts, banners, and the man
//! text itself; only the section between the NAME header and the trailing
//! Version banner is worth keeping.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Interactive prompt marker stripped from tool output.
const PROMPT_MARKER: &str = "fc_shell>";

/// Section header that starts the useful part of a man page.
const NAME_HEADER: &str = "NAME";

/// Trailing banner prefix that ends the useful part.
const VERSION_BANNER: &str = "Version ";

/// One marker-delimited block per requested code; bodies span lines.
static BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<<<CODE:(.*?)>>>(.*?)<<<END>>>").expect("block pattern is valid")
});

/// Scanner states for one pass over a man-page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeName,
    Recording,
    Done,
}

/// Reduce a raw man-page body to the text between the `NAME` header
/// (exclusive) and the trailing `Version` banner (exclusive), with
/// interactive prompt lines removed.
///
/// Returns an empty string when no `NAME` header is present.
pub fn clean_man_text(raw: &str) -> String {
    let mut state = ScanState::BeforeName;
    let mut kept: Vec<&str> = Vec::new();

    for line in raw.lines() {
        let line = line.trim_end();
        let trimmed = line.trim();

        if trimmed.starts_with(PROMPT_MARKER) {
            continue;
        }

        match state {
            ScanState::BeforeName => {
                if trimmed == NAME_HEADER {
                    state = ScanState::Recording;
                }
            }
            ScanState::Recording => {
                if trimmed.starts_with(VERSION_BANNER) {
                    state = ScanState::Done;
                } else {
                    kept.push(line);
                }
            }
            ScanState::Done => break,
        }
    }

    kept.join("\n").trim().to_string()
}

/// Split combined fc_shell output into per-code bodies, keyed by the code
/// inside each start marker. Bodies are cleaned before storage.
pub fn parse_man_output(output: &str) -> HashMap<String, String> {
    let mut pages = HashMap::new();
    for caps in BLOCK_RE.captures_iter(output) {
        let code = caps[1].trim().to_string();
        pages.insert(code, clean_man_text(&caps[2]));
    }
    pages
}
