use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::RoomType;

#[derive(Parser, Debug)]
#[command(name = "hotel")]
#[command(about = "Manage hotel guests, rooms and bookings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// SQLite database file (defaults to ~/.hotel-manager/hotel.sqlite)
    #[arg(long, env = "HOTEL_DB", global = true)]
    pub database: Option<PathBuf>,

    /// Increase log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// One subcommand per operation. Any field left out is prompted for.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new room
    AddRoom {
        #[arg(long)]
        room_number: Option<String>,

        /// Single, Double or Suite (case-insensitive)
        #[arg(long)]
        room_type: Option<RoomType>,

        /// Price per night, in whole currency units
        #[arg(long, allow_negative_numbers = true)]
        price: Option<i64>,
    },

    /// List every room with its availability
    ViewRooms,

    /// Register a new guest
    AddGuest {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// List every guest
    ViewGuests,

    /// Book an available room for a guest
    BookRoom {
        #[arg(long)]
        guest_id: Option<i64>,

        #[arg(long)]
        room_id: Option<i64>,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: Option<String>,

        /// Check-out date (YYYY-MM-DD), strictly after check-in
        #[arg(long)]
        check_out: Option<String>,
    },

    /// List bookings grouped by guest
    ViewBookings,
}
