//! Binary entry point: parse arguments, set up logging, run one command
//! against the SQLite store and print the result.
use std::io;
use std::process::ExitCode;

use clap::Parser;
use hotel_manager::cli::{self, Cli, Prompter};
use hotel_manager::{logging, Config};

/// Results and errors both go to stdout as text; the exit status tells a
/// script which one it got.
fn main() -> ExitCode {
    let Cli {
        command,
        database,
        verbose,
    } = Cli::parse();
    let config = match Config::resolve(database, verbose) {
        Ok(config) => config,
        Err(err) => {
            println!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let result = cli::run(command, &config, &mut prompter);

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            println!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
