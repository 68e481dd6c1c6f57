//! Error taxonomy shared by the repository and the booking workflow. Callers
//! match on the variants to tell a bad request apart from a missing record or
//! an already booked room; the command layer only needs the `Display` text.

use std::fmt;

use thiserror::Error;

/// Convenience alias used throughout the persistence and booking modules.
pub type Result<T, E = HotelError> = std::result::Result<T, E>;

/// Every failure a repository or workflow operation can report.
#[derive(Debug, Error)]
pub enum HotelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{entity} with ID {id} not found.")]
    NotFound { entity: Entity, id: i64 },
    #[error(transparent)]
    Conflict(#[from] ConflictError),
    #[error("storage failure")]
    Store(#[from] rusqlite::Error),
}

impl HotelError {
    pub(crate) fn not_found(entity: Entity, id: i64) -> Self {
        HotelError::NotFound { entity, id }
    }
}

/// Rejected input: malformed values, broken invariants, or constraint hits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Date must be in YYYY-MM-DD format (got '{0}').")]
    MalformedDate(String),
    #[error("Check-out date must be after check-in date.")]
    InvalidDateRange,
    #[error("{0} is required.")]
    MissingField(&'static str),
    #[error("Room number {0} already exists.")]
    DuplicateRoomNumber(String),
    #[error("Price per night cannot be negative (got {0}).")]
    NegativePrice(i64),
    #[error("Unknown room type '{0}'. Expected Single, Double or Suite.")]
    UnknownRoomType(String),
    #[error("Constraint violated: {0}")]
    Constraint(String),
}

/// The request is well-formed but clashes with current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConflictError {
    #[error("Room {room_number} is not available.")]
    RoomUnavailable { room_number: String },
}

/// Record kinds that can be looked up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Guest,
    Room,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Guest => f.write_str("Guest"),
            Entity::Room => f.write_str("Room"),
        }
    }
}
