//! Command-line interface layer.

mod args;
mod report;
mod run;

pub mod commands;

pub use args::{Arguments, Command};

/// Run the CLI. Errors are reported, never returned: the process exit code
/// stays at success regardless of what the pipeline ran into.
pub fn run_cli(args: Arguments) {
    let Some(args) = args.with_command_or_help() else {
        return;
    };

    match run::run(args) {
        Ok(summary) => report::print(&summary),
        Err(err) => report::print_error(&err),
    }
}
