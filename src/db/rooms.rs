use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{ffi, params, Connection, Error as SqlError, ErrorCode, OptionalExtension, Row};
use tracing::debug;

use crate::error::{HotelError, Result, ValidationError};
use crate::models::{NewRoom, Room, RoomType};

impl ToSql for RoomType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for RoomType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|err| FromSqlError::Other(Box::new(err)))
    }
}

const ROOM_COLUMNS: &str = "id, room_number, room_type, price_per_night, is_available";

fn room_from_row(row: &Row<'_>) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        room_number: row.get(1)?,
        room_type: row.get(2)?,
        price_per_night: row.get(3)?,
        is_available: row.get(4)?,
    })
}

/// Retrieve every room in id order.
pub fn fetch_rooms(conn: &Connection) -> Result<Vec<Room>> {
    let mut stmt = conn.prepare(&format!("SELECT {ROOM_COLUMNS} FROM rooms ORDER BY id"))?;
    let rooms = stmt
        .query_map([], room_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rooms)
}

/// Look a room up by id. `None` means no such room.
pub fn fetch_room(conn: &Connection, id: i64) -> Result<Option<Room>> {
    let room = conn
        .query_row(
            &format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE id = ?1"),
            [id],
            room_from_row,
        )
        .optional()?;
    Ok(room)
}

/// Insert a new room, returning the hydrated struct. Blank numbers, negative
/// prices and duplicate numbers are rejected before anything is written.
pub fn create_room(conn: &Connection, room: &NewRoom) -> Result<Room> {
    let room_number = room.room_number.trim();
    if room_number.is_empty() {
        return Err(ValidationError::MissingField("Room number").into());
    }
    if room.price_per_night < 0 {
        return Err(ValidationError::NegativePrice(room.price_per_night).into());
    }

    conn.execute(
        "INSERT INTO rooms (room_number, room_type, price_per_night, is_available)
         VALUES (?1, ?2, ?3, 1)",
        params![room_number, room.room_type, room.price_per_night],
    )
    .map_err(|err| map_constraint(err, room_number))?;

    let id = conn.last_insert_rowid();
    debug!(id, room_number, "room created");
    Ok(Room {
        id,
        room_number: room_number.to_string(),
        room_type: room.room_type,
        price_per_night: room.price_per_night,
        is_available: true,
    })
}

/// Flip a room to booked. Returns `false` when the room was already booked
/// (or does not exist), leaving the caller to decide how to report it.
pub fn mark_room_booked(conn: &Connection, id: i64) -> Result<bool> {
    let updated = conn.execute(
        "UPDATE rooms SET is_available = 0 WHERE id = ?1 AND is_available = 1",
        [id],
    )?;
    Ok(updated == 1)
}

/// Coerce SQLite constraint errors into validation errors. The unique index on
/// `room_number` is the one we expect to hit.
fn map_constraint(err: SqlError, room_number: &str) -> HotelError {
    match &err {
        SqlError::SqliteFailure(failure, _)
            if failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            ValidationError::DuplicateRoomNumber(room_number.to_string()).into()
        }
        SqlError::SqliteFailure(failure, message)
            if failure.code == ErrorCode::ConstraintViolation =>
        {
            let detail = message.clone().unwrap_or_else(|| failure.to_string());
            ValidationError::Constraint(detail).into()
        }
        _ => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;

    fn new_room(number: &str, room_type: RoomType, price: i64) -> NewRoom {
        NewRoom {
            room_number: number.into(),
            room_type,
            price_per_night: price,
        }
    }

    #[test]
    fn created_rooms_start_available() {
        let conn = open_in_memory().unwrap();
        let room = create_room(&conn, &new_room("101", RoomType::Single, 100)).unwrap();

        assert_eq!(room.id, 1);
        assert!(room.is_available);
        assert_eq!(fetch_room(&conn, room.id).unwrap(), Some(room));
    }

    #[test]
    fn duplicate_room_number_is_rejected_and_store_unchanged() {
        let conn = open_in_memory().unwrap();
        create_room(&conn, &new_room("101", RoomType::Single, 100)).unwrap();
        let before = fetch_rooms(&conn).unwrap();

        let err = create_room(&conn, &new_room("101", RoomType::Suite, 300)).unwrap_err();

        assert!(matches!(
            err,
            HotelError::Validation(ValidationError::DuplicateRoomNumber(ref n)) if n == "101"
        ));
        assert_eq!(fetch_rooms(&conn).unwrap(), before);
    }

    #[test]
    fn blank_number_and_negative_price_are_validation_errors() {
        let conn = open_in_memory().unwrap();

        let err = create_room(&conn, &new_room("   ", RoomType::Double, 80)).unwrap_err();
        assert!(matches!(
            err,
            HotelError::Validation(ValidationError::MissingField("Room number"))
        ));

        let err = create_room(&conn, &new_room("102", RoomType::Double, -1)).unwrap_err();
        assert!(matches!(
            err,
            HotelError::Validation(ValidationError::NegativePrice(-1))
        ));
        assert!(fetch_rooms(&conn).unwrap().is_empty());
    }

    #[test]
    fn missing_room_is_none() {
        let conn = open_in_memory().unwrap();
        assert_eq!(fetch_room(&conn, 42).unwrap(), None);
    }

    #[test]
    fn mark_room_booked_only_flips_once() {
        let conn = open_in_memory().unwrap();
        let room = create_room(&conn, &new_room("201", RoomType::Suite, 250)).unwrap();

        assert!(mark_room_booked(&conn, room.id).unwrap());
        assert!(!mark_room_booked(&conn, room.id).unwrap());
        assert!(!fetch_room(&conn, room.id).unwrap().unwrap().is_available);
    }

    #[test]
    fn room_type_round_trips_through_its_column() {
        let conn = open_in_memory().unwrap();
        create_room(&conn, &new_room("301", RoomType::Double, 120)).unwrap();

        let stored: String = conn
            .query_row("SELECT room_type FROM rooms WHERE id = 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(stored, "Double");
        assert_eq!(fetch_rooms(&conn).unwrap()[0].room_type, RoomType::Double);
    }
}
