//! Directory walking for Dart source files.

use std::path::{Path, PathBuf};

use colored::Colorize;
use walkdir::WalkDir;

/// Generated Dart files never carry hand-written UI text.
const GENERATED_SUFFIXES: &[&str] = &[".g.dart", ".freezed.dart"];
const GENERATED_FILES: &[&str] = &["app_localizations.dart"];

/// Recursively collect the `.dart` files under `root`, sorted so downstream
/// processing is deterministic. Unreadable entries are logged and skipped.
pub fn scan_dart_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!(
                    "{} skipping unreadable entry: {}",
                    "warning:".bold().yellow(),
                    err
                );
                continue;
            }
        };
        if entry.file_type().is_file() && is_source_file(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    files
}

fn is_source_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if !name.ends_with(".dart") {
        return false;
    }
    !(GENERATED_SUFFIXES.iter().any(|s| name.ends_with(s)) || GENERATED_FILES.contains(&name))
}
