//! In-place source rewriting: quoted literals become `context.l10n`
//! accessors.
//!
//! Rewriting is modeled as a pure transform from old content to new content;
//! the actual file write happens in the command layer, which keeps dry runs
//! and unit tests off the filesystem.

use regex::{Captures, Regex};

use crate::core::patterns::{self, L10N_ACCESSOR};
use crate::core::table::ResourceTable;

const EXTENSION_PATH: &str = "utils/context_extension.dart";

/// The one import rewritten code needs.
///
/// Presence is checked by substring match on the module path, so quote style
/// or trailing whitespace differences do not defeat idempotence.
#[derive(Debug, Clone)]
pub struct ImportDirective {
    line: String,
    fragment: String,
}

impl ImportDirective {
    pub fn for_package(package_name: &str) -> Self {
        Self {
            line: format!("import 'package:{}/{}';", package_name, EXTENSION_PATH),
            fragment: EXTENSION_PATH.to_string(),
        }
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn is_present(&self, content: &str) -> bool {
        content.contains(&self.fragment)
    }

    /// Insert the import after the last import-style line, or at the top of
    /// the file when there is none. Returns `None` when already present.
    pub fn insert(&self, content: &str) -> Option<String> {
        if self.is_present(content) {
            return None;
        }

        let mut lines: Vec<&str> = content.lines().collect();
        let last_import = lines
            .iter()
            .rposition(|line| line.trim_start().starts_with("import "));
        let insert_at = match last_import {
            Some(index) => index + 1,
            None => 0,
        };
        lines.insert(insert_at, self.line());

        let mut result = lines.join("\n");
        if content.ends_with('\n') {
            result.push('\n');
        }
        Some(result)
    }
}

struct RewriteRule {
    pattern: Regex,
    accessor: String,
}

/// Longest-match-first literal replacer built from a merged table.
pub struct Rewriter {
    rules: Vec<RewriteRule>,
}

impl Rewriter {
    /// Build replacement rules from the table's text entries.
    ///
    /// Rules are ordered by value length, descending. This ordering is
    /// mandatory: when one literal is a prefix or substring of another, the
    /// longer literal must be substituted first or the shorter pattern would
    /// match inside the longer literal's quotes and corrupt them. Ties break
    /// lexicographically to keep runs reproducible.
    pub fn new(table: &ResourceTable) -> Self {
        let mut pairs: Vec<(&str, &str)> = table.reverse_index().into_iter().collect();
        pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

        let rules = pairs
            .into_iter()
            .map(|(value, key)| RewriteRule {
                pattern: patterns::replacement_pattern(value),
                accessor: format!("{}.{}", L10N_ACCESSOR, key),
            })
            .collect();
        Self { rules }
    }

    /// Apply every rule to `content`, returning the new text and the number
    /// of replacements made.
    pub fn rewrite(&self, content: &str) -> (String, usize) {
        let mut text = content.to_string();
        let mut total = 0;
        for rule in &self.rules {
            let mut count = 0;
            let replaced = rule
                .pattern
                .replace_all(&text, |caps: &Captures| {
                    count += 1;
                    format!("{}{}", &caps[1], rule.accessor)
                })
                .into_owned();
            if count > 0 {
                text = replaced;
                total += count;
            }
        }
        (text, total)
    }
}

/// Pure transform of one file: rewrite literals, then ensure the import when
/// anything changed. Returns `None` when the file is already clean.
pub fn rewrite_file(
    content: &str,
    rewriter: &Rewriter,
    import: &ImportDirective,
) -> Option<(String, usize)> {
    let (text, replaced) = rewriter.rewrite(content);
    if replaced == 0 {
        return None;
    }
    let text = match import.insert(&text) {
        Some(with_import) => with_import,
        None => text,
    };
    Some((text, replaced))
}
