//! Domain models that mirror the SQLite schema. They stay plain data holders;
//! persistence lives in `db` and the booking rules live in `booking`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A person who may hold bookings.
pub struct Guest {
    pub id: i64,
    pub name: String,
    /// Stored as NULL when the operator left the prompt blank.
    pub phone: Option<String>,
}

/// Input for creating a guest; the id is assigned by SQLite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuest {
    pub name: String,
    pub phone: Option<String>,
}

/// The fixed set of room categories the hotel offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [RoomType::Single, RoomType::Double, RoomType::Suite];

    /// Canonical spelling, used both for display and for the `room_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = ValidationError;

    /// Case-insensitive, so `suite` and `SUITE` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        RoomType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownRoomType(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A bookable unit. `is_available` flips to false when the room is booked and
/// nothing flips it back.
pub struct Room {
    pub id: i64,
    pub room_number: String,
    pub room_type: RoomType,
    pub price_per_night: i64,
    pub is_available: bool,
}

impl Room {
    pub fn status(&self) -> RoomStatus {
        if self.is_available {
            RoomStatus::Available
        } else {
            RoomStatus::Booked
        }
    }
}

/// Input for creating a room. New rooms always start out available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub room_number: String,
    pub room_type: RoomType,
    pub price_per_night: i64,
}

/// Lifecycle of a room: `Available` moves to `Booked`, which is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Booked,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Available => f.write_str("Available"),
            RoomStatus::Booked => f.write_str("Booked"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A stay linking one guest to one room.
pub struct Booking {
    pub id: i64,
    pub guest_id: i64,
    pub room_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// A booking joined with the guest name and room number it points at. This is
/// what the bookings view prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDetail {
    pub booking_id: i64,
    pub guest_id: i64,
    pub guest_name: String,
    pub room_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}
