//! The booking workflow: the only place where a room changes state. A request
//! is checked against the guest and room records and the stay dates, then the
//! room flag update and the booking insert are committed together.

use chrono::NaiveDate;
use rusqlite::{Connection, TransactionBehavior};
use tracing::{info, warn};

use crate::db::{fetch_guest, fetch_room, insert_booking, mark_room_booked};
use crate::error::{ConflictError, Entity, HotelError, Result, ValidationError};
use crate::models::{Booking, Guest, Room};

/// Date format accepted on the command line and stored in the database.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::MalformedDate(trimmed.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub guest_id: i64,
    pub room_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl BookingRequest {
    /// Number of nights covered; positive for any request that passes
    /// validation.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Everything the caller needs to confirm a booking to the operator. `room`
/// reflects the state after the booking, so it is always `Booked`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub booking: Booking,
    pub guest: Guest,
    pub room: Room,
}

/// Book a room for a guest.
///
/// Checks run in a fixed order: guest exists, room exists, room is available,
/// check-out falls after check-in. Only when all pass is the room marked booked
/// and the booking recorded, both inside one transaction. Any early return
/// drops the transaction, which rolls it back.
pub fn book_room(conn: &mut Connection, request: &BookingRequest) -> Result<Confirmation> {
    // IMMEDIATE takes the write lock before the availability read.
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let guest = fetch_guest(&tx, request.guest_id)?
        .ok_or_else(|| HotelError::not_found(Entity::Guest, request.guest_id))?;
    let mut room = fetch_room(&tx, request.room_id)?
        .ok_or_else(|| HotelError::not_found(Entity::Room, request.room_id))?;

    let unavailable = || ConflictError::RoomUnavailable {
        room_number: room.room_number.clone(),
    };

    if !room.is_available {
        warn!(room_id = room.id, "room already booked");
        return Err(unavailable().into());
    }

    if request.check_out <= request.check_in {
        warn!(
            check_in = %request.check_in,
            check_out = %request.check_out,
            "rejected booking with empty or inverted stay"
        );
        return Err(ValidationError::InvalidDateRange.into());
    }

    if !mark_room_booked(&tx, room.id)? {
        return Err(unavailable().into());
    }
    let booking = insert_booking(
        &tx,
        guest.id,
        room.id,
        request.check_in,
        request.check_out,
    )?;
    tx.commit()?;

    info!(
        booking_id = booking.id,
        guest_id = guest.id,
        room_number = %room.room_number,
        nights = request.nights(),
        "room booked"
    );
    room.is_available = false;
    Ok(Confirmation {
        booking,
        guest,
        room,
    })
}
