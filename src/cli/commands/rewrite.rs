use std::fs;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use super::{CommandSummary, RewriteSummary};
use crate::config::Config;
use crate::core::file_scanner::scan_dart_files;
use crate::core::rewrite::{ImportDirective, Rewriter, rewrite_file};
use crate::core::table::ResourceTable;

#[derive(Default)]
struct FileOutcome {
    modified: bool,
    replacements: usize,
    skipped: bool,
}

/// Replace extracted literals under the rewrite scope with `context.l10n`
/// accessors, inserting the extension import where needed.
///
/// This is the only command that mutates source file content.
pub fn rewrite(config: &Config) -> Result<CommandSummary> {
    let table_path = config.primary_table_path();
    let table = ResourceTable::load_or_default(&table_path, &config.primary_locale);
    let rewriter = Rewriter::new(&table);
    let import = ImportDirective::for_package(&config.package_name);

    let files = scan_dart_files(Path::new(&config.rewrite_scope));

    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|path| {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(err) => {
                    eprintln!(
                        "{} skipping {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        err
                    );
                    return FileOutcome {
                        skipped: true,
                        ..Default::default()
                    };
                }
            };

            let Some((updated, replacements)) = rewrite_file(&content, &rewriter, &import) else {
                return FileOutcome::default();
            };

            match fs::write(path, updated) {
                Ok(()) => FileOutcome {
                    modified: true,
                    replacements,
                    skipped: false,
                },
                Err(err) => {
                    eprintln!(
                        "{} could not write {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        err
                    );
                    FileOutcome {
                        skipped: true,
                        ..Default::default()
                    }
                }
            }
        })
        .collect();

    Ok(CommandSummary::Rewrite(RewriteSummary {
        files_scanned: files.len(),
        files_modified: outcomes.iter().filter(|o| o.modified).count(),
        replacements: outcomes.iter().map(|o| o.replacements).sum(),
        skipped: outcomes.iter().filter(|o| o.skipped).count(),
    }))
}
