//! Machine-translation adapter and per-locale fan-out.
//!
//! The adapter is an external collaborator: each string is one blocking API
//! call, and a failed call costs only that string (the source text is kept
//! as a fallback value), never the batch.

use colored::Colorize;
use serde_json::Value;
use thiserror::Error;

use crate::config::language_subtag;
use crate::core::table::ResourceTable;

/// Typed failure from a translation request.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("response carried no translation")]
    MalformedResponse,
}

/// A service that translates one string at a time.
pub trait Translator {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslateError>;
}

const ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

/// Google Cloud Translation v2 client.
pub struct GoogleTranslator {
    client: reqwest::blocking::Client,
    api_key: String,
}

impl GoogleTranslator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
        }
    }
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslateError> {
        let response = self
            .client
            .post(ENDPOINT)
            .form(&[
                ("q", text),
                ("source", source),
                ("target", target),
                ("format", "text"),
                ("key", self.api_key.as_str()),
            ])
            .send()?
            .error_for_status()?;

        let body: Value = response.json()?;
        body["data"]["translations"][0]["translatedText"]
            .as_str()
            .map(String::from)
            .ok_or(TranslateError::MalformedResponse)
    }
}

/// Result of translating the primary table into one target locale.
pub struct LocaleTranslation {
    pub table: ResourceTable,
    pub translated: usize,
    /// Strings whose translation failed and fell back to the source text.
    pub fallbacks: usize,
}

/// Build a full table for `target_locale` from the primary table.
///
/// Metadata, non-string, and blank entries are skipped. The written locale
/// tag is the bare language subtag (`zh-CN` becomes `zh`), while the full
/// target tag goes to the translation service.
pub fn translate_table(
    source: &ResourceTable,
    source_locale: &str,
    target_locale: &str,
    translator: &dyn Translator,
) -> LocaleTranslation {
    let mut table = ResourceTable::empty(language_subtag(target_locale));
    table.ensure_locale_tag();

    let source_lang = language_subtag(source_locale);
    let mut translated = 0;
    let mut fallbacks = 0;
    for (key, value) in source.text_entries() {
        if value.trim().is_empty() {
            continue;
        }
        let rendered = match translator.translate(value, source_lang, target_locale) {
            Ok(text) => {
                translated += 1;
                text
            }
            Err(err) => {
                eprintln!(
                    "{} {} ({}): {}",
                    "warning:".bold().yellow(),
                    key,
                    target_locale,
                    err
                );
                fallbacks += 1;
                value.to_string()
            }
        };
        table.insert(key, Value::String(rendered));
    }

    LocaleTranslation {
        table,
        translated,
        fallbacks,
    }
}
