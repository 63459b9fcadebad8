use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".arborc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Dart package name from pubspec.yaml, used to build the extension import.
    #[serde(default = "default_package_name")]
    pub package_name: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Directory holding the `app_<lang>.arb` files.
    #[serde(default = "default_l10n_dir", alias = "arbDir")]
    pub l10n_dir: String,
    /// Subset of the source root that `rewrite` and `imports` are allowed to
    /// touch. Extraction and sync scan the whole source root; in-place
    /// rewriting is kept on a shorter leash.
    #[serde(default = "default_rewrite_scope")]
    pub rewrite_scope: String,
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,
    /// Every locale the project ships, primary included.
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    /// Google Cloud Translation API key for the `translate` command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_api_key: Option<String>,
}

fn default_package_name() -> String {
    "app".to_string()
}

fn default_source_root() -> String {
    "lib".to_string()
}

fn default_l10n_dir() -> String {
    "lib/l10n".to_string()
}

fn default_rewrite_scope() -> String {
    "lib/screens".to_string()
}

fn default_primary_locale() -> String {
    "en".to_string()
}

fn default_locales() -> Vec<String> {
    vec!["en".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package_name: default_package_name(),
            source_root: default_source_root(),
            l10n_dir: default_l10n_dir(),
            rewrite_scope: default_rewrite_scope(),
            primary_locale: default_primary_locale(),
            locales: default_locales(),
            translate_api_key: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.package_name.trim().is_empty() {
            bail!("'packageName' must not be empty");
        }
        if self.primary_locale.trim().is_empty() {
            bail!("'primaryLocale' must not be empty");
        }
        if self.locales.is_empty() {
            bail!("'locales' must list at least one locale");
        }
        if !self.locales.iter().any(|l| l == &self.primary_locale) {
            bail!(
                "'locales' must include the primary locale \"{}\"",
                self.primary_locale
            );
        }
        Ok(())
    }

    /// Path of the ARB table for a locale: `<l10nDir>/app_<lang>.arb`.
    ///
    /// Region subtags are stripped, so `zh-CN` maps to `app_zh.arb` with
    /// locale tag `zh`.
    pub fn table_path(&self, locale: &str) -> PathBuf {
        Path::new(&self.l10n_dir).join(format!("app_{}.arb", language_subtag(locale)))
    }

    pub fn primary_table_path(&self) -> PathBuf {
        self.table_path(&self.primary_locale)
    }

    /// Locales that receive machine translations (everything but primary).
    pub fn target_locales(&self) -> impl Iterator<Item = &String> {
        self.locales.iter().filter(|l| *l != &self.primary_locale)
    }
}

/// Language subtag of a locale tag: `zh-CN` -> `zh`, `en` -> `en`.
pub fn language_subtag(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
