use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::error::{Result, ValidationError};
use crate::models::{Guest, NewGuest};

fn guest_from_row(row: &Row<'_>) -> rusqlite::Result<Guest> {
    Ok(Guest {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
    })
}

/// Retrieve every guest in id order.
pub fn fetch_guests(conn: &Connection) -> Result<Vec<Guest>> {
    let mut stmt = conn.prepare("SELECT id, name, phone FROM guests ORDER BY id")?;
    let guests = stmt
        .query_map([], guest_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(guests)
}

/// Look a guest up by id. `None` means no such guest.
pub fn fetch_guest(conn: &Connection, id: i64) -> Result<Option<Guest>> {
    let guest = conn
        .query_row(
            "SELECT id, name, phone FROM guests WHERE id = ?1",
            [id],
            guest_from_row,
        )
        .optional()?;
    Ok(guest)
}

/// Insert a new guest. Names are trimmed and required; a blank phone is stored
/// as NULL.
pub fn create_guest(conn: &Connection, guest: &NewGuest) -> Result<Guest> {
    let name = guest.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingField("Guest name").into());
    }
    let phone = guest
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|phone| !phone.is_empty());

    conn.execute(
        "INSERT INTO guests (name, phone) VALUES (?1, ?2)",
        params![name, phone],
    )?;

    let id = conn.last_insert_rowid();
    debug!(id, name, "guest created");
    Ok(Guest {
        id,
        name: name.to_string(),
        phone: phone.map(str::to_string),
    })
}
