//! Command-line surface: argument parsing, interactive prompts, table
//! rendering, and dispatch into the repository and booking workflow.

mod args;
mod commands;
mod prompt;
pub mod render;

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::config::Config;
use crate::db;

pub use args::{Cli, Command};
pub use commands::{execute, Request};
pub use prompt::Prompter;

/// Run one command: gather any missing input, then open a database session
/// that lives exactly as long as the command. The connection is dropped on
/// every return path, so a failed command never leaves a transaction open.
pub fn run<R: BufRead, W: Write>(
    command: Command,
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> Result<String> {
    let request = command.resolve(prompter)?;
    debug!(?request, "resolved command");

    let mut conn = db::open(&config.database)?;
    execute(&mut conn, &request, config.styled)
}
