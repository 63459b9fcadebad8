//! Identifier synthesis for extracted text.

use crate::utils::capitalize;

/// Identifier used when a fragment strips down to nothing.
pub const FALLBACK_KEY: &str = "textKey";

const MAX_KEY_LENGTH: usize = 40;

/// Base lowerCamelCase identifier for a text fragment, before collision
/// handling: non-alphanumeric characters are dropped, words joined in
/// lowerCamel case, the result truncated to 40 characters.
pub fn base_key(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();

    let mut words = cleaned.split_whitespace();
    let Some(first) = words.next() else {
        return FALLBACK_KEY.to_string();
    };

    let mut key = first.to_lowercase();
    for word in words {
        key.push_str(&capitalize(word));
    }
    key.truncate(MAX_KEY_LENGTH);
    key
}

/// Unique identifier for `text` against the destination table's key set.
///
/// Collisions append successive integer suffixes (1, 2, 3, ...). The result
/// depends on insertion order, so callers that need reproducible assignments
/// must feed texts in a fixed order.
pub fn synthesize_key(text: &str, is_taken: impl Fn(&str) -> bool) -> String {
    let base = base_key(text);
    if !is_taken(&base) {
        return base;
    }
    let mut suffix = 1;
    loop {
        let candidate = format!("{}{}", base, suffix);
        if !is_taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
