//! CLI argument definitions using clap.
//!
//! Each pipeline stage is an independent subcommand with no flags of its
//! own; every setting comes from `.arborc.json`.
//!
//! ## Commands
//!
//! - `extract`: Scan source for UI text and merge it into the primary table
//! - `rewrite`: Replace extracted literals with `context.l10n` accessors
//! - `imports`: Ensure the extension import is present in scope files
//! - `sync`: Back-fill every locale table with keys referenced in source
//! - `translate`: Machine-translate the primary table into target locales
//! - `init`: Initialize arbo configuration file

use clap::{CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract UI text literals and merge them into the primary ARB table
    Extract,
    /// Replace extracted literals with context.l10n accessors
    Rewrite,
    /// Ensure the localization extension import is present in scope files
    Imports,
    /// Back-fill every locale table with keys referenced in source
    Sync,
    /// Machine-translate the primary table into each target locale
    Translate,
    /// Initialize a new .arborc.json configuration file
    Init,
}
