use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hotel(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hotel").unwrap();
    cmd.env_remove("HOTEL_LOG")
        .env("NO_COLOR", "1")
        .arg("--database")
        .arg(db);
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn add_view_and_book_end_to_end() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("hotel.sqlite");

    hotel(&db)
        .args(["add-room", "--room-number", "101", "--room-type", "Single", "--price", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Room 101 added successfully!"));

    hotel(&db)
        .arg("view-rooms")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 | 101 | Single | 100 | Available"));

    hotel(&db)
        .args(["add-guest", "--name", "Alice", "--phone", "555-1111"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Guest 'Alice' added successfully!"));

    hotel(&db)
        .arg("view-guests")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 | Alice | 555-1111"));

    hotel(&db)
        .args([
            "book-room",
            "--guest-id",
            "1",
            "--room-id",
            "1",
            "--check-in",
            "2024-06-01",
            "--check-out",
            "2024-06-03",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Room 101 booked for 'Alice' from 2024-06-01 to 2024-06-03.",
        ));

    hotel(&db)
        .arg("view-rooms")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 | 101 | Single | 100 | Booked"));

    hotel(&db)
        .arg("view-bookings")
        .assert()
        .success()
        .stdout(predicate::str::contains("Guest: Alice"))
        .stdout(predicate::str::contains("1 | 101 | 2024-06-01 | 2024-06-03"));
}

#[test]
fn views_print_identical_output_twice() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("hotel.sqlite");

    hotel(&db)
        .args(["add-room", "--room-number", "201", "--room-type", "suite", "--price", "300"])
        .assert()
        .success();

    for view in ["view-rooms", "view-guests", "view-bookings"] {
        let first = stdout_of(hotel(&db).arg(view));
        let second = stdout_of(hotel(&db).arg(view));
        assert_eq!(first, second, "{view} output changed between runs");
    }
}

#[test]
fn duplicate_room_number_is_reported() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("hotel.sqlite");
    let add = ["add-room", "--room-number", "101", "--room-type", "Double", "--price", "90"];

    hotel(&db).args(add).assert().success();
    hotel(&db)
        .args(add)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Room number 101 already exists."));

    let rooms = stdout_of(hotel(&db).arg("view-rooms"));
    assert_eq!(rooms.matches("| 101 |").count(), 1);
}

#[test]
fn booking_errors_are_printed_not_crashed() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("hotel.sqlite");

    hotel(&db)
        .args(["add-room", "--room-number", "101", "--room-type", "Single", "--price", "100"])
        .assert()
        .success();
    hotel(&db)
        .args(["add-guest", "--name", "Alice", "--phone", "555-1111"])
        .assert()
        .success();

    let book = |guest: &str, check_out: &str| {
        let mut cmd = hotel(&db);
        cmd.args([
            "book-room",
            "--guest-id",
            guest,
            "--room-id",
            "1",
            "--check-in",
            "2024-05-10",
            "--check-out",
            check_out,
        ]);
        cmd
    };

    book("9999", "2024-05-11")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Guest with ID 9999 not found."));
    book("1", "2024-05-10")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Check-out date must be after check-in date.",
        ));
    book("1", "not-a-date")
        .assert()
        .failure()
        .stdout(predicate::str::contains("YYYY-MM-DD"));
    book("1", "2024-05-11").assert().success();
    book("1", "2024-05-12")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Room 101 is not available."));

    let bookings = stdout_of(hotel(&db).arg("view-bookings"));
    assert_eq!(bookings.matches("2024-05-10").count(), 1);
}

#[test]
fn missing_fields_are_prompted_from_stdin() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("hotel.sqlite");

    hotel(&db)
        .arg("add-guest")
        .write_stdin("Bob\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Guest name: "))
        .stdout(predicate::str::contains("Guest 'Bob' added successfully!"));

    hotel(&db)
        .arg("view-guests")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 | Bob | -"));
}

#[test]
fn closed_stdin_fails_required_prompts() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("hotel.sqlite");

    hotel(&db)
        .arg("add-room")
        .assert()
        .failure()
        .stdout(predicate::str::contains("no value provided for Room number"));
}
