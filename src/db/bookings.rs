use chrono::NaiveDate;
use rusqlite::{params, Connection};
use tracing::debug;

use crate::error::Result;
use crate::models::{Booking, BookingDetail};

/// Insert a booking row. Only the booking workflow calls this, inside the same
/// transaction that flips the room's availability.
pub fn insert_booking(
    conn: &Connection,
    guest_id: i64,
    room_id: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<Booking> {
    conn.execute(
        "INSERT INTO bookings (guest_id, room_id, check_in_date, check_out_date)
         VALUES (?1, ?2, ?3, ?4)",
        params![guest_id, room_id, check_in, check_out],
    )?;

    let id = conn.last_insert_rowid();
    debug!(id, guest_id, room_id, "booking row inserted");
    Ok(Booking {
        id,
        guest_id,
        room_id,
        check_in,
        check_out,
    })
}

/// Retrieve the raw booking rows in id order.
pub fn fetch_bookings(conn: &Connection) -> Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, guest_id, room_id, check_in_date, check_out_date
         FROM bookings
         ORDER BY id",
    )?;
    let bookings = stmt
        .query_map([], |row| {
            Ok(Booking {
                id: row.get(0)?,
                guest_id: row.get(1)?,
                room_id: row.get(2)?,
                check_in: row.get(3)?,
                check_out: row.get(4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(bookings)
}

/// Join every booking with its guest name and room number, in booking id
/// order. The bookings view groups these by guest.
pub fn fetch_booking_details(conn: &Connection) -> Result<Vec<BookingDetail>> {
    let mut stmt = conn.prepare(
        "SELECT b.id, g.id, g.name, r.room_number, b.check_in_date, b.check_out_date
         FROM bookings b
         INNER JOIN guests g ON g.id = b.guest_id
         INNER JOIN rooms r ON r.id = b.room_id
         ORDER BY b.id",
    )?;
    let details = stmt
        .query_map([], |row| {
            Ok(BookingDetail {
                booking_id: row.get(0)?,
                guest_id: row.get(1)?,
                guest_name: row.get(2)?,
                room_number: row.get(3)?,
                check_in: row.get(4)?,
                check_out: row.get(5)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_guest, create_room, open_in_memory};
    use crate::models::{NewGuest, NewRoom, RoomType};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn details_join_guest_and_room() {
        let conn = open_in_memory().unwrap();
        let alice = create_guest(
            &conn,
            &NewGuest {
                name: "Alice".into(),
                phone: None,
            },
        )
        .unwrap();
        let room = create_room(
            &conn,
            &NewRoom {
                room_number: "101".into(),
                room_type: RoomType::Single,
                price_per_night: 100,
            },
        )
        .unwrap();

        let booking =
            insert_booking(&conn, alice.id, room.id, date("2024-06-01"), date("2024-06-03"))
                .unwrap();

        assert_eq!(fetch_bookings(&conn).unwrap(), vec![booking.clone()]);
        assert_eq!(
            fetch_booking_details(&conn).unwrap(),
            vec![BookingDetail {
                booking_id: booking.id,
                guest_id: alice.id,
                guest_name: "Alice".into(),
                room_number: "101".into(),
                check_in: date("2024-06-01"),
                check_out: date("2024-06-03"),
            }]
        );
    }

    #[test]
    fn dangling_references_are_refused() {
        let conn = open_in_memory().unwrap();
        let result = insert_booking(&conn, 7, 8, date("2024-06-01"), date("2024-06-02"));

        assert!(result.is_err());
        assert!(fetch_bookings(&conn).unwrap().is_empty());
    }
}
