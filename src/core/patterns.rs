//! UI-text position markers shared by the extractor and the rewriter.
//!
//! Recognition is pattern-based on a fixed set of syntactic positions, not a
//! Dart parser. Both halves of the pipeline read the same marker table, so
//! any literal extraction picked up is one the rewriter can find again.

use regex::Regex;

/// Widget attributes whose quoted values are user-facing text.
pub const UI_ATTRIBUTES: &[&str] = &[
    "text",
    "label",
    "labelText",
    "hintText",
    "errorText",
    "helperText",
    "title",
    "subtitle",
    "message",
    "tooltip",
    "semanticsLabel",
];

/// Accessor written by the rewriter and recognized by the usage scanner.
pub const L10N_ACCESSOR: &str = "context.l10n";

const QUOTES: [char; 2] = ['"', '\''];

/// Regex prefixes for every UI-text position, without the quoted literal:
/// `Text(` constructor calls plus the attribute positions.
pub fn marker_prefixes() -> Vec<String> {
    vec![
        r"Text\s*\(\s*".to_string(),
        format!(r"\b(?:{})\s*:\s*", UI_ATTRIBUTES.join("|")),
    ]
}

/// Patterns matching an optionally raw, quoted literal in a UI-text
/// position. One per (marker, quote character); group 1 captures the literal
/// body with its escapes intact.
pub fn literal_patterns() -> Vec<(Regex, char)> {
    let mut patterns = Vec::new();
    for prefix in marker_prefixes() {
        for quote in QUOTES {
            let pattern = format!(r"(?s){prefix}r?{quote}((?:\\.|[^{quote}\\])*){quote}");
            patterns.push((Regex::new(&pattern).expect("marker pattern is static"), quote));
        }
    }
    patterns
}

/// Pattern matching `marker + quoted literal` for one exact table value.
/// Group 1 captures the marker prefix so the replacement can keep it.
pub fn replacement_pattern(value: &str) -> Regex {
    let prefixes = marker_prefixes().join("|");
    let arms: Vec<String> = QUOTES.iter().map(|&quote| quoted_arm(value, quote)).collect();
    let pattern = format!("({prefixes})(?:{})", arms.join("|"));
    Regex::new(&pattern).expect("value is regex-escaped")
}

/// A literal as it appears in source inside `quote` quotes: regex-escaped,
/// with embedded quote characters expected in backslash-escaped form.
fn quoted_arm(value: &str, quote: char) -> String {
    let escaped = regex::escape(value).replace(quote, &format!(r"\\{quote}"));
    format!("r?{quote}{escaped}{quote}")
}
