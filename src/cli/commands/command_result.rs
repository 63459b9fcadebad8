//! Per-command summaries reported to the user after a run.

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Rewrite(RewriteSummary),
    Imports(ImportsSummary),
    Sync(SyncSummary),
    Translate(TranslateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub files_scanned: usize,
    /// Unique candidate texts found in source.
    pub candidates: usize,
    pub added: usize,
    pub reused: usize,
    pub total_keys: usize,
    pub table_path: String,
}

#[derive(Debug)]
pub struct RewriteSummary {
    pub files_scanned: usize,
    pub files_modified: usize,
    pub replacements: usize,
    /// Files skipped because they could not be read or written.
    pub skipped: usize,
}

#[derive(Debug)]
pub struct ImportsSummary {
    pub added: usize,
    pub skipped: usize,
}

#[derive(Debug)]
pub struct LocaleSyncSummary {
    pub locale: String,
    pub added: usize,
}

#[derive(Debug)]
pub struct SyncSummary {
    pub files_scanned: usize,
    pub used_keys: usize,
    pub locales: Vec<LocaleSyncSummary>,
}

#[derive(Debug)]
pub struct LocaleTranslateSummary {
    pub locale: String,
    pub translated: usize,
    pub fallbacks: usize,
    pub table_path: String,
}

#[derive(Debug)]
pub struct TranslateSummary {
    pub locales: Vec<LocaleTranslateSummary>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}
