//! Persistence module split across logical submodules.

mod bookings;
mod connection;
mod guests;
mod rooms;

pub use bookings::{fetch_booking_details, fetch_bookings, insert_booking};
pub use connection::{ensure_schema, open, open_in_memory};
pub use guests::{create_guest, fetch_guest, fetch_guests};
pub use rooms::{create_room, fetch_room, fetch_rooms, mark_room_booked};
