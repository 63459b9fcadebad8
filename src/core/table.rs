//! Per-locale ARB resource tables.

use std::collections::HashMap;
use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use serde_json::{Map, Value};

/// Keys starting with this marker are metadata, never translatable content.
pub const METADATA_MARKER: char = '@';

/// Reserved entry naming the table's locale.
pub const LOCALE_TAG_KEY: &str = "@@locale";

/// One locale's ARB table: an ordered identifier -> value mapping.
///
/// Entry order survives load and save, so a run that changes nothing leaves
/// the file byte-identical.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceTable {
    locale: String,
    entries: Map<String, Value>,
}

impl ResourceTable {
    pub fn empty(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            entries: Map::new(),
        }
    }

    pub fn load(path: &Path, locale: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read ARB file: {:?}", path))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse ARB file: {:?}", path))?;
        let Value::Object(entries) = value else {
            bail!("Root of ARB file must be an object: {:?}", path);
        };
        Ok(Self {
            locale: locale.to_string(),
            entries,
        })
    }

    /// Load a table, falling back to an empty one tagged with `locale` when
    /// the file is missing or does not parse. A corrupt table costs its
    /// contents, never the run.
    pub fn load_or_default(path: &Path, locale: &str) -> Self {
        let loaded = if path.exists() {
            match Self::load(path, locale) {
                Ok(table) => Some(table),
                Err(err) => {
                    eprintln!(
                        "{} could not load {}: {:#}",
                        "warning:".bold().yellow(),
                        path.display(),
                        err
                    );
                    None
                }
            }
        } else {
            None
        };

        loaded.unwrap_or_else(|| {
            let mut table = Self::empty(locale);
            table.ensure_locale_tag();
            table
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn is_metadata(key: &str) -> bool {
        key.starts_with(METADATA_MARKER)
    }

    pub fn ensure_locale_tag(&mut self) {
        if !self.entries.contains_key(LOCALE_TAG_KEY) {
            self.entries
                .insert(LOCALE_TAG_KEY.to_string(), Value::String(self.locale.clone()));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Non-metadata entries with string values, in table order.
    pub fn text_entries(&self) -> impl Iterator<Item = (&String, &str)> {
        self.entries.iter().filter_map(|(key, value)| {
            if Self::is_metadata(key) {
                return None;
            }
            value.as_str().map(|text| (key, text))
        })
    }

    /// Derived value -> identifier index over the text entries.
    ///
    /// When two identifiers share a value, the first one in table order
    /// wins. Downstream code may depend on either identifier, so the
    /// ambiguity stays visible here instead of being resolved away.
    pub fn reverse_index(&self) -> HashMap<&str, &str> {
        let mut index: HashMap<&str, &str> = HashMap::new();
        for (key, value) in self.text_entries() {
            index.entry(value).or_insert(key.as_str());
        }
        index
    }

    /// Serialize with two-space indentation and a trailing newline.
    pub fn to_pretty_json(&self) -> Result<String> {
        let content = serde_json::to_string_pretty(&Value::Object(self.entries.clone()))
            .context("Failed to serialize ARB table")?;
        Ok(format!("{}\n", content))
    }

    /// Write the table, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(path, self.to_pretty_json()?)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }
}
