use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::booking::{book_room, parse_date, BookingRequest};
use crate::db::{
    create_guest, create_room, fetch_booking_details, fetch_guests, fetch_rooms,
};
use crate::models::{NewGuest, NewRoom};

use super::args::Command;
use super::prompt::Prompter;
use super::render;

/// A command with every field filled in, ready to run against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    AddRoom(NewRoom),
    ViewRooms,
    AddGuest(NewGuest),
    ViewGuests,
    BookRoom(BookingRequest),
    ViewBookings,
}

impl Command {
    /// Fill in missing fields by prompting. Values given on the command line
    /// are used as-is; dates are validated here so a malformed flag fails
    /// before the database is touched.
    pub fn resolve<R: BufRead, W: Write>(self, prompter: &mut Prompter<R, W>) -> Result<Request> {
        let request = match self {
            Command::AddRoom {
                room_number,
                room_type,
                price,
            } => Request::AddRoom(NewRoom {
                room_number: prompter.text_or_ask(room_number, "Room number")?,
                room_type: prompter
                    .parsed_or_ask(room_type, "Room type (Single/Double/Suite)")?,
                price_per_night: prompter.parsed_or_ask(price, "Price per night")?,
            }),
            Command::ViewRooms => Request::ViewRooms,
            Command::AddGuest { name, phone } => {
                let name = prompter.text_or_ask(name, "Guest name")?;
                let phone = match phone {
                    Some(phone) => Some(phone),
                    None => prompter.optional_text("Guest phone number")?,
                };
                Request::AddGuest(NewGuest { name, phone })
            }
            Command::ViewGuests => Request::ViewGuests,
            Command::BookRoom {
                guest_id,
                room_id,
                check_in,
                check_out,
            } => {
                let guest_id = prompter.parsed_or_ask(guest_id, "Guest ID")?;
                let room_id = prompter.parsed_or_ask(room_id, "Room ID")?;
                let check_in = match check_in {
                    Some(raw) => parse_date(&raw).context("invalid check-in date")?,
                    None => prompter.parse_with("Check-in date (YYYY-MM-DD)", parse_date)?,
                };
                let check_out = match check_out {
                    Some(raw) => parse_date(&raw).context("invalid check-out date")?,
                    None => prompter.parse_with("Check-out date (YYYY-MM-DD)", parse_date)?,
                };
                Request::BookRoom(BookingRequest {
                    guest_id,
                    room_id,
                    check_in,
                    check_out,
                })
            }
            Command::ViewBookings => Request::ViewBookings,
        };
        Ok(request)
    }
}

/// Run a resolved request and return the text to show the operator.
pub fn execute(conn: &mut Connection, request: &Request, styled: bool) -> Result<String> {
    match request {
        Request::AddRoom(room) => {
            let room = create_room(conn, room).context("could not add room")?;
            Ok(format!("Room {} added successfully!", room.room_number))
        }
        Request::ViewRooms => {
            let rooms = fetch_rooms(conn).context("could not load rooms")?;
            Ok(render::rooms(&rooms, styled))
        }
        Request::AddGuest(guest) => {
            let guest = create_guest(conn, guest).context("could not add guest")?;
            Ok(format!("Guest '{}' added successfully!", guest.name))
        }
        Request::ViewGuests => {
            let guests = fetch_guests(conn).context("could not load guests")?;
            Ok(render::guests(&guests))
        }
        Request::BookRoom(booking) => {
            let confirmation = book_room(conn, booking).context("could not book room")?;
            Ok(format!(
                "Room {} booked for '{}' from {} to {}.",
                confirmation.room.room_number,
                confirmation.guest.name,
                confirmation.booking.check_in,
                confirmation.booking.check_out,
            ))
        }
        Request::ViewBookings => {
            let details = fetch_booking_details(conn).context("could not load bookings")?;
            Ok(render::bookings(&details))
        }
    }
}
