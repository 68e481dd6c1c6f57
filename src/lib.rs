//! Core library surface for the hotel manager CLI.
//!
//! `db` holds the SQLite repository, `booking` the one workflow with real
//! rules, and `cli` the argument parsing, prompts and table output used by the
//! `hotel` binary.
pub mod booking;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;

/// The booking workflow and its request type.
pub use booking::{book_room, BookingRequest, Confirmation};

pub use config::Config;
pub use error::{ConflictError, Entity, HotelError, ValidationError};

/// The primary domain types that other layers manipulate.
pub use models::{Booking, BookingDetail, Guest, NewGuest, NewRoom, Room, RoomStatus, RoomType};
