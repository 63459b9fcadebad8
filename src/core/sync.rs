//! Locale synchronization: back-fill tables with identifiers used in code.
//!
//! After a sync pass, every identifier referenced in source exists in every
//! configured locale's table. Placeholder values make the tables complete;
//! they do not make them translated, which is why non-primary placeholders
//! carry an explicit marker.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::core::table::ResourceTable;
use crate::utils::capitalize;

/// Placeholder prefix marking entries that still need a human translation.
pub const UNTRANSLATED_MARKER: &str = "[TRANSLATE]";

/// Sentence-case placeholder for a camelCase identifier: a space goes in
/// front of each internal capital that follows a lowercase letter or digit,
/// then the first letter is capitalized and the rest lowered.
pub fn camel_to_sentence(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for c in key.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            spaced.push(' ');
        }
        spaced.push(c);
        prev = Some(c);
    }
    capitalize(&spaced)
}

/// Add a placeholder entry for every used identifier the table lacks.
/// Existing entries, used or not, are never touched. Returns the keys that
/// were added.
pub fn sync_table(
    table: &mut ResourceTable,
    used_keys: &BTreeSet<String>,
    is_primary: bool,
) -> Vec<String> {
    let mut added = Vec::new();
    for key in used_keys {
        if table.contains_key(key) {
            continue;
        }
        let placeholder = camel_to_sentence(key);
        let value = if is_primary {
            placeholder
        } else {
            format!("{} {}", UNTRANSLATED_MARKER, placeholder)
        };
        table.insert(key, Value::String(value));
        added.push(key.clone());
    }
    added
}
