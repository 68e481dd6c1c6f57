use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use crossterm::tty::IsTty;
use directories::BaseDirs;

/// Hidden directory in the home folder that holds the hotel records.
const DATA_DIR_NAME: &str = ".hotel-manager";
/// Guests, rooms and bookings all share this one SQLite file.
const DB_FILE_NAME: &str = "hotel.sqlite";

/// Runtime settings for one invocation of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite file opened for each command.
    pub database: PathBuf,
    /// Number of `-v` flags; raises the default log level.
    pub verbosity: u8,
    /// Whether table cells may carry terminal colors.
    pub styled: bool,
}

impl Config {
    /// Build the configuration from what the command line provided. An explicit
    /// database path (flag or `HOTEL_DB`, both handled by clap) wins over the
    /// default location under the home directory.
    pub fn resolve(database: Option<PathBuf>, verbosity: u8) -> Result<Self> {
        let database = match database {
            Some(path) => path,
            None => default_db_path()?,
        };
        Ok(Self {
            database,
            verbosity,
            styled: color_enabled(),
        })
    }
}

/// Where the hotel database lives when neither `--database` nor `HOTEL_DB`
/// names one.
pub fn default_db_path() -> Result<PathBuf> {
    let home = BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| anyhow!("no home directory to keep the hotel database in"))?;
    Ok(home.join(DATA_DIR_NAME).join(DB_FILE_NAME))
}

/// Colors only go to a real terminal, and `NO_COLOR` always turns them off.
fn color_enabled() -> bool {
    env::var_os("NO_COLOR").is_none() && io::stdout().is_tty()
}
