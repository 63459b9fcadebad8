use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use super::{CommandSummary, LocaleSyncSummary, SyncSummary};
use crate::config::{Config, language_subtag};
use crate::core::file_scanner::scan_dart_files;
use crate::core::scan::UsageScanner;
use crate::core::sync::sync_table;
use crate::core::table::ResourceTable;

/// Back-fill every configured locale table with placeholder entries for the
/// identifiers the source actually references.
pub fn sync(config: &Config) -> Result<CommandSummary> {
    let files = scan_dart_files(Path::new(&config.source_root));
    let scanner = UsageScanner::new();

    let used: BTreeSet<String> = files
        .par_iter()
        .map(|path| match fs::read_to_string(path) {
            Ok(content) => scanner.scan(&content),
            Err(err) => {
                eprintln!(
                    "{} skipping {}: {}",
                    "warning:".bold().yellow(),
                    path.display(),
                    err
                );
                BTreeSet::new()
            }
        })
        .reduce(BTreeSet::new, |mut acc, found| {
            acc.extend(found);
            acc
        });

    let mut locales = Vec::new();
    for locale in &config.locales {
        let path = config.table_path(locale);
        let mut table = ResourceTable::load_or_default(&path, language_subtag(locale));

        let added = sync_table(&mut table, &used, locale == &config.primary_locale);
        if !added.is_empty()
            && let Err(err) = table.save(&path)
        {
            eprintln!(
                "{} could not write {}: {:#}",
                "warning:".bold().yellow(),
                path.display(),
                err
            );
        }

        locales.push(LocaleSyncSummary {
            locale: locale.clone(),
            added: added.len(),
        });
    }

    Ok(CommandSummary::Sync(SyncSummary {
        files_scanned: files.len(),
        used_keys: used.len(),
        locales,
    }))
}
