use std::fs;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::{CommandSummary, ImportsSummary};
use crate::config::Config;
use crate::core::file_scanner::scan_dart_files;
use crate::core::rewrite::ImportDirective;

/// Ensure the extension import is present in every file under the rewrite
/// scope, whether or not the file has had literals rewritten yet.
pub fn imports(config: &Config) -> Result<CommandSummary> {
    let import = ImportDirective::for_package(&config.package_name);
    let files = scan_dart_files(Path::new(&config.rewrite_scope));

    let mut added = 0;
    let mut skipped = 0;
    for path in &files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                eprintln!(
                    "{} skipping {}: {}",
                    "warning:".bold().yellow(),
                    path.display(),
                    err
                );
                skipped += 1;
                continue;
            }
        };

        match import.insert(&content) {
            Some(updated) => match fs::write(path, updated) {
                Ok(()) => added += 1,
                Err(err) => {
                    eprintln!(
                        "{} could not write {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        err
                    );
                    skipped += 1;
                }
            },
            None => skipped += 1,
        }
    }

    Ok(CommandSummary::Imports(ImportsSummary { added, skipped }))
}
