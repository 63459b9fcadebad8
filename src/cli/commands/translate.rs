use anyhow::Result;
use colored::Colorize;

use super::{CommandSummary, LocaleTranslateSummary, TranslateSummary};
use crate::config::{CONFIG_FILE_NAME, Config, language_subtag};
use crate::core::table::ResourceTable;
use crate::translate::{GoogleTranslator, translate_table};

/// Translate the primary table into each target locale, one blocking API
/// call per string. A failed call falls back to the source text for that
/// entry and the batch carries on.
pub fn translate(config: &Config) -> Result<CommandSummary> {
    let Some(api_key) = config.translate_api_key.as_deref() else {
        anyhow::bail!("'translateApiKey' is not set in {}", CONFIG_FILE_NAME);
    };

    let source_path = config.primary_table_path();
    let source = ResourceTable::load_or_default(&source_path, &config.primary_locale);
    let translator = GoogleTranslator::new(api_key);
    let source_lang = language_subtag(&config.primary_locale);

    let mut locales = Vec::new();
    for locale in config.target_locales() {
        let outcome = translate_table(&source, source_lang, locale, &translator);

        let path = config.table_path(locale);
        if let Err(err) = outcome.table.save(&path) {
            eprintln!(
                "{} could not write {}: {:#}",
                "warning:".bold().yellow(),
                path.display(),
                err
            );
        }

        locales.push(LocaleTranslateSummary {
            locale: locale.clone(),
            translated: outcome.translated,
            fallbacks: outcome.fallbacks,
            table_path: path.display().to_string(),
        });
    }

    Ok(CommandSummary::Translate(TranslateSummary { locales }))
}
