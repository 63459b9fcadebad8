use std::path::Path;

use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::{self, CommandSummary};
use crate::config::load_config;

/// Dispatch to the appropriate command handler based on parsed arguments.
///
/// All commands except `init` read configuration from the current directory
/// (walking upward until a `.git` boundary), falling back to defaults when
/// no config file exists.
pub fn run(Arguments { command }: Arguments) -> Result<CommandSummary> {
    match command {
        Some(Command::Init) => commands::init::init(),
        Some(command) => {
            let config = load_config(Path::new("."))?.config;
            match command {
                Command::Extract => commands::extract::extract(&config),
                Command::Rewrite => commands::rewrite::rewrite(&config),
                Command::Imports => commands::imports::imports(&config),
                Command::Sync => commands::sync::sync(&config),
                Command::Translate => commands::translate::translate(&config),
                Command::Init => anyhow::bail!("Init is handled before config loading"),
            }
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
