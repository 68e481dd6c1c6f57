use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::debug;

/// Open (creating if needed) the SQLite database at `path`, run lazy
/// migrations, and return a live connection. The caller owns the connection
/// for the duration of one command; dropping it closes the session.
pub fn open(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create data directory {}", parent.display()))?;
    }

    let conn = Connection::open(path)
        .with_context(|| format!("failed to open SQLite database {}", path.display()))?;
    debug!(path = %path.display(), "opened database");
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Same schema as [`open`], held entirely in memory. Handy for tests and
/// throwaway sessions.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Create the three tables if they are missing. Also toggles
/// `PRAGMA foreign_keys = ON`, which SQLite leaves off per connection.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign keys")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS guests (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            phone TEXT
        )",
        [],
    )
    .context("failed to create guests table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS rooms (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            room_number TEXT NOT NULL UNIQUE,
            room_type TEXT NOT NULL,
            price_per_night INTEGER NOT NULL,
            is_available INTEGER NOT NULL DEFAULT 1
        )",
        [],
    )
    .context("failed to create rooms table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS bookings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            guest_id INTEGER NOT NULL,
            room_id INTEGER NOT NULL,
            check_in_date TEXT NOT NULL,
            check_out_date TEXT NOT NULL,
            FOREIGN KEY(guest_id) REFERENCES guests(id),
            FOREIGN KEY(room_id) REFERENCES rooms(id)
        )",
        [],
    )
    .context("failed to create bookings table")?;

    Ok(())
}
