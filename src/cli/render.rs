//! Plain-text tables for the view commands. Rendering returns a `String` so the
//! caller decides where it goes and tests can compare output directly.

use crossterm::style::Stylize;

use crate::models::{BookingDetail, Guest, Room, RoomStatus};

/// Placeholder for empty optional cells.
const EMPTY_CELL: &str = "-";

/// Render a titled table: a header row, a dashed rule as wide as the header,
/// one ` | `-joined line per row, and a closing rule.
pub fn table(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let header_line = headers.join(" | ");
    let rule = "-".repeat(header_line.chars().count());

    let mut lines = vec![
        String::new(),
        format!("--- {title} ---"),
        header_line,
        rule.clone(),
    ];
    lines.extend(rows.iter().map(|row| row.join(" | ")));
    lines.push(rule);
    lines.join("\n")
}

pub fn rooms(rooms: &[Room], styled: bool) -> String {
    let rows: Vec<Vec<String>> = rooms
        .iter()
        .map(|room| {
            vec![
                room.id.to_string(),
                room.room_number.clone(),
                room.room_type.to_string(),
                room.price_per_night.to_string(),
                status_cell(room.status(), styled),
            ]
        })
        .collect();
    table(
        "All Rooms",
        &["ID", "Number", "Type", "Price", "Status"],
        &rows,
    )
}

pub fn guests(guests: &[Guest]) -> String {
    let rows: Vec<Vec<String>> = guests
        .iter()
        .map(|guest| {
            vec![
                guest.id.to_string(),
                guest.name.clone(),
                guest.phone.clone().unwrap_or_else(|| EMPTY_CELL.to_string()),
            ]
        })
        .collect();
    table("All Guests", &["ID", "Name", "Phone"], &rows)
}

/// Bookings grouped per guest, guests ordered by their earliest booking. The
/// heading carries the guest id so namesakes can be told apart.
pub fn bookings(details: &[BookingDetail]) -> String {
    let mut out = String::from("\n--- All Bookings ---");
    if details.is_empty() {
        out.push_str("\nNo bookings recorded.");
        return out;
    }

    for (guest_id, guest_name, group) in group_by_guest(details) {
        let rows: Vec<Vec<String>> = group
            .iter()
            .map(|detail| {
                vec![
                    detail.booking_id.to_string(),
                    detail.room_number.clone(),
                    detail.check_in.to_string(),
                    detail.check_out.to_string(),
                ]
            })
            .collect();
        out.push_str(&format!("\n\nGuest: {guest_name} (ID {guest_id})"));
        out.push_str(&table(
            "Booking Details",
            &["Booking ID", "Room Number", "Check-in", "Check-out"],
            &rows,
        ));
    }
    out
}

/// Group by guest id, keeping first-appearance order. Two guests sharing a
/// name still get separate sections.
fn group_by_guest(details: &[BookingDetail]) -> Vec<(i64, &str, Vec<&BookingDetail>)> {
    let mut groups: Vec<(i64, &str, Vec<&BookingDetail>)> = Vec::new();
    for detail in details {
        match groups.iter_mut().find(|(id, _, _)| *id == detail.guest_id) {
            Some((_, _, group)) => group.push(detail),
            None => groups.push((detail.guest_id, detail.guest_name.as_str(), vec![detail])),
        }
    }
    groups
}

fn status_cell(status: RoomStatus, styled: bool) -> String {
    if !styled {
        return status.to_string();
    }
    match status {
        RoomStatus::Available => status.to_string().green().to_string(),
        RoomStatus::Booked => status.to_string().red().to_string(),
    }
}
