//! Diagnostic logging for the binary. Command output goes to stdout; tracing
//! events go to stderr so they never mix with the printed tables.

use std::io;

use crossterm::tty::IsTty;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Environment variable holding an explicit `EnvFilter` directive.
pub const LOG_ENV: &str = "HOTEL_LOG";

/// Default directive for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber at the level the config asks for.
/// `HOTEL_LOG` overrides it. Calling this twice is harmless; the second
/// install is ignored.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config.verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_tty())
        .with_target(false)
        .try_init();
}
