//! Usage scanning: which identifiers does the source actually reference.

use std::collections::BTreeSet;

use regex::Regex;

/// Recognizes both access forms for a localized string:
/// `context.l10n.key` and `AppLocalizations.of(context)!.key` (the `!` is
/// optional).
pub struct UsageScanner {
    pattern: Regex,
}

impl Default for UsageScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageScanner {
    pub fn new() -> Self {
        let pattern = Regex::new(
            r"(?:context\.l10n|AppLocalizations\.of\(context\)!?)\s*\.\s*([A-Za-z0-9_]+)",
        )
        .expect("usage pattern is static");
        Self { pattern }
    }

    /// Referenced identifiers in one file's text. The set is ordered so
    /// downstream back-filling appends keys deterministically.
    pub fn scan(&self, content: &str) -> BTreeSet<String> {
        let mut used = BTreeSet::new();
        self.scan_into(content, &mut used);
        used
    }

    pub fn scan_into(&self, content: &str, used: &mut BTreeSet<String>) {
        for captures in self.pattern.captures_iter(content) {
            used.insert(captures[1].to_string());
        }
    }
}
