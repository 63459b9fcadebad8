//! Merging extracted candidates into the primary locale table.

use serde_json::Value;

use crate::core::key::synthesize_key;
use crate::core::table::ResourceTable;

/// Result of merging candidates into an existing table.
#[derive(Debug)]
pub struct MergeOutcome {
    pub table: ResourceTable,
    /// Keys minted for texts not present in the previous table.
    pub added: usize,
    /// Candidates whose existing identifier was reused.
    pub reused: usize,
}

/// Merge `candidates` into `existing`, preserving every prior identifier
/// assignment and appending new ones.
///
/// Candidates must arrive deduplicated and in a fixed order (the commands
/// sort them lexicographically): collision suffixing depends on insertion
/// order, and a stable input order is what makes key assignment reproducible
/// across runs.
///
/// Running the same merge twice is a no-op on the table. Reused identifiers
/// keep their position, untouched entries are copied forward, and nothing is
/// ever removed.
pub fn merge_candidates(candidates: &[String], existing: &ResourceTable) -> MergeOutcome {
    let mut table = ResourceTable::empty(existing.locale());

    // Metadata entries come first, in their original order.
    for (key, value) in existing.iter() {
        if ResourceTable::is_metadata(key) {
            table.insert(key, value.clone());
        }
    }
    table.ensure_locale_tag();

    let reverse = existing.reverse_index();

    let mut added = 0;
    let mut reused = 0;
    for text in candidates {
        match reverse.get(text.as_str()) {
            // The text already has an identifier; re-affirm the binding even
            // if the fragment moved files.
            Some(key) => {
                table.insert(key, Value::String(text.clone()));
                reused += 1;
            }
            None => {
                let key = synthesize_key(text, |k| table.contains_key(k));
                table.insert(&key, Value::String(text.clone()));
                added += 1;
            }
        }
    }

    // Keys no longer matched by extraction may still be referenced from
    // code; carry them forward untouched.
    for (key, value) in existing.iter() {
        if !table.contains_key(key) {
            table.insert(key, value.clone());
        }
    }

    MergeOutcome {
        table,
        added,
        reused,
    }
}
