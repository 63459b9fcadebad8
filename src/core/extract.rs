//! Candidate extraction: find literal UI text in one file's source.

use regex::Regex;

use crate::core::patterns;
use crate::utils::contains_alphabetic;

/// Substrings that mark a literal as non-text content: interpolation,
/// member access, asset paths, package imports, URLs.
const BLACKLIST_SUBSTRINGS: &[&str] = &[
    "${",
    "widget.",
    ".toString",
    "assets/",
    "lib/",
    "package:",
    "http://",
    "https://",
];

/// A literal ending in one of these is an asset reference, not UI text.
const NON_TEXT_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".svg", ".json"];

/// Scans one file's text for literals sitting in UI-text positions.
pub struct Extractor {
    patterns: Vec<(Regex, char)>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            patterns: patterns::literal_patterns(),
        }
    }

    /// Pure scan; returns the trimmed fragments that pass the validity
    /// filter. Never fails; unreadable files are the caller's problem to
    /// log and skip.
    pub fn extract(&self, content: &str) -> Vec<String> {
        let mut results = Vec::new();
        for (pattern, quote) in &self.patterns {
            for captures in pattern.captures_iter(content) {
                let unescaped =
                    captures[1].replace(&format!("\\{}", quote), &quote.to_string());
                if is_valid_text(&unescaped) {
                    results.push(unescaped.trim().to_string());
                }
            }
        }
        results
    }
}

fn is_valid_text(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.chars().count() < 2 {
        return false;
    }
    if !contains_alphabetic(trimmed) {
        return false;
    }
    if BLACKLIST_SUBSTRINGS.iter().any(|bad| trimmed.contains(bad)) {
        return false;
    }
    let lower = trimmed.to_lowercase();
    if NON_TEXT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        return false;
    }
    true
}
