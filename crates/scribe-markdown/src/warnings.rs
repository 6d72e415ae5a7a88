//! Heuristic syntax warnings.
//!
//! Textual scans over the raw Markdown source, independent of the parser.
//! Best-effort by design: false positives and negatives are acceptable, and
//! a warning never blocks rendering.

use std::sync::LazyLock;

use regex::Regex;

static STAR_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*+").unwrap());
static STRIKE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~").unwrap());
static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").unwrap());
static IMAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").unwrap());

/// Scan `text` for likely Markdown syntax mistakes.
///
/// Every rule runs on every call; the result order is fixed: bold, italic,
/// strikethrough, code fences, malformed links, malformed images.
pub fn check_syntax(text: &str) -> Vec<String> {
    let mut warnings = Vec::new();
    check_into(text, &mut warnings);
    warnings
}

/// Append warnings for `text` onto an existing list.
pub fn check_into(text: &str, warnings: &mut Vec<String>) {
    // A run of n stars contains n/2 double markers, and its final star is
    // the one single marker not followed by another star.
    let mut bold_markers = 0usize;
    let mut italic_markers = 0usize;
    for run in STAR_RUNS.find_iter(text) {
        bold_markers += run.len() / 2;
        italic_markers += 1;
    }
    if bold_markers % 2 != 0 {
        warnings.push("Unmatched bold markers (**) detected".to_string());
    }
    if italic_markers % 2 != 0 {
        warnings.push("Unmatched italic markers (*) detected".to_string());
    }

    if STRIKE.find_iter(text).count() % 2 != 0 {
        warnings.push("Unmatched strikethrough markers (~~) detected".to_string());
    }

    if CODE_FENCE.find_iter(text).count() % 2 != 0 {
        warnings.push("Unmatched code block markers (```) detected".to_string());
    }

    for caps in LINK.captures_iter(text) {
        if caps[2].trim().is_empty() {
            warnings.push(format!("Malformed link detected: {}", &caps[0]));
        }
    }

    for caps in IMAGE.captures_iter(text) {
        if caps[2].trim().is_empty() {
            warnings.push(format!("Malformed image detected: {}", &caps[0]));
        }
    }
}
