use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use super::{CommandSummary, ExtractSummary};
use crate::config::Config;
use crate::core::extract::Extractor;
use crate::core::file_scanner::scan_dart_files;
use crate::core::merge::merge_candidates;
use crate::core::table::ResourceTable;

/// Scan the source root for UI text and merge the findings into the primary
/// locale table.
pub fn extract(config: &Config) -> Result<CommandSummary> {
    let files = scan_dart_files(Path::new(&config.source_root));
    let extractor = Extractor::new();

    let per_file: Vec<Vec<String>> = files
        .par_iter()
        .map(|path| match fs::read_to_string(path) {
            Ok(content) => extractor.extract(&content),
            Err(err) => {
                eprintln!(
                    "{} skipping {}: {}",
                    "warning:".bold().yellow(),
                    path.display(),
                    err
                );
                Vec::new()
            }
        })
        .collect();

    // Deduplicated, lexicographic candidate order keeps collision suffixing
    // reproducible run over run.
    let candidates: Vec<String> = per_file
        .into_iter()
        .flatten()
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();

    let table_path = config.primary_table_path();
    let existing = ResourceTable::load_or_default(&table_path, &config.primary_locale);
    let outcome = merge_candidates(&candidates, &existing);
    outcome.table.save(&table_path)?;

    Ok(CommandSummary::Extract(ExtractSummary {
        files_scanned: files.len(),
        candidates: candidates.len(),
        added: outcome.added,
        reused: outcome.reused,
        total_keys: outcome.table.len(),
        table_path: table_path.display().to_string(),
    }))
}
