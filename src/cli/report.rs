//! Human-readable summaries for each command.
//!
//! Output mirrors linter-style tools: one green check line per completed
//! stage on stdout, warnings and errors on stderr. Nothing here affects the
//! exit code.

use colored::Colorize;

use super::commands::{
    CommandSummary, ExtractSummary, ImportsSummary, InitSummary, RewriteSummary, SyncSummary,
    TranslateSummary,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(summary: &CommandSummary) {
    match summary {
        CommandSummary::Extract(s) => print_extract(s),
        CommandSummary::Rewrite(s) => print_rewrite(s),
        CommandSummary::Imports(s) => print_imports(s),
        CommandSummary::Sync(s) => print_sync(s),
        CommandSummary::Translate(s) => print_translate(s),
        CommandSummary::Init(s) => print_init(s),
    }
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "error:".bold().red(), err);
}

fn print_extract(summary: &ExtractSummary) {
    println!(
        "Scanned {} source {}, found {} unique {}.",
        summary.files_scanned,
        plural_file(summary.files_scanned),
        summary.candidates,
        plural(summary.candidates, "string", "strings"),
    );
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Merged {} ({} added, {} reused, {} total keys)",
            summary.table_path, summary.added, summary.reused, summary.total_keys
        )
        .green()
    );
}

fn print_rewrite(summary: &RewriteSummary) {
    println!(
        "Scanned {} source {}.",
        summary.files_scanned,
        plural_file(summary.files_scanned)
    );
    if summary.skipped > 0 {
        println!(
            "{} {} file(s) skipped",
            "warning:".bold().yellow(),
            summary.skipped
        );
    }
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Replaced {} {} across {} {}",
            summary.replacements,
            plural(summary.replacements, "literal", "literals"),
            summary.files_modified,
            plural_file(summary.files_modified),
        )
        .green()
    );
}

fn print_imports(summary: &ImportsSummary) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Added import to {} {} ({} already present or skipped)",
            summary.added,
            plural_file(summary.added),
            summary.skipped
        )
        .green()
    );
}

fn print_sync(summary: &SyncSummary) {
    println!(
        "Scanned {} source {}, found {} used {}.",
        summary.files_scanned,
        plural_file(summary.files_scanned),
        summary.used_keys,
        plural(summary.used_keys, "key", "keys"),
    );
    for locale in &summary.locales {
        if locale.added == 0 {
            println!("  {}: up to date", locale.locale);
        } else {
            println!(
                "  {}: added {} {}",
                locale.locale,
                locale.added,
                plural(locale.added, "placeholder", "placeholders"),
            );
        }
    }
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        "All locale tables cover the keys used in source".green()
    );
}

fn print_translate(summary: &TranslateSummary) {
    for locale in &summary.locales {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{}: {} translated, {} fell back to source ({})",
                locale.locale, locale.translated, locale.fallbacks, locale.table_path
            )
            .green()
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

fn plural_file(count: usize) -> &'static str {
    plural(count, "file", "files")
}
