use std::process::ExitCode;

use arbo::cli::Arguments;
use clap::Parser;

fn main() -> ExitCode {
    let args = Arguments::parse();

    // Every stage makes partial progress and reports a summary; failures are
    // logged to stderr rather than surfaced as a failing exit code.
    arbo::cli::run_cli(args);
    ExitCode::SUCCESS
}
