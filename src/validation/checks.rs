//! Checks over a maze document.
//!
//! Each check takes the document (and index where it needs one) and
//! returns a `ValidationResult`.

use std::collections::HashMap;

use crate::document::{Document, RoomNumber};
use crate::index::RoomTypeIndex;

use super::warning::{Diagnostic, ValidationResult};

/// Highest number whose padded form is exactly two digits.
const MAX_TWO_DIGIT: u32 = 99;

/// Rooms sharing a number would overwrite each other's passage file.
pub fn check_duplicate_rooms(document: &Document) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<RoomNumber, usize> = HashMap::new();

    for room in &document.rooms {
        *seen.entry(room.number).or_default() += 1;
    }

    let mut duplicates: Vec<_> = seen.into_iter().filter(|(_, n)| *n > 1).collect();
    duplicates.sort();

    for (number, count) in duplicates {
        result.push(
            Diagnostic::error(
                "maze::validate::duplicate-room",
                format!("defined {} times", count),
            )
            .in_room(number)
            .with_help("Room numbers must be unique; each one names a passage file"),
        );
    }

    result
}

/// Every link must point at a room that exists.
pub fn check_link_targets(document: &Document, index: &RoomTypeIndex) -> ValidationResult {
    let mut result = ValidationResult::new();

    for room in &document.rooms {
        for link in room.links.iter().filter(|l| !index.contains(l.dir)) {
            result.push(
                Diagnostic::error(
                    "maze::validate::unknown-room",
                    format!("links to room {}, which does not exist", link.dir),
                )
                .in_room(room.number)
                .with_help(format!("Add a room with number {} or fix the link", link.dir)),
            );
        }
    }

    result
}

pub fn check_room_numbers(document: &Document) -> ValidationResult {
    let mut result = ValidationResult::new();

    for room in &document.rooms {
        let n = room.number.get();
        if n == 0 {
            result.push(
                Diagnostic::error("maze::validate::zero-room", "room numbers start at 1")
                    .in_room(room.number),
            );
        } else if n > MAX_TWO_DIGIT {
            result.push(
                Diagnostic::warning(
                    "maze::validate::wide-number",
                    format!("renders as '{}', wider than two digits", room.number.padded()),
                )
                .in_room(room.number),
            );
        }
    }

    result
}

/// Links with no coordinates produce an unclickable area.
pub fn check_link_maps(document: &Document) -> ValidationResult {
    let mut result = ValidationResult::new();

    for room in &document.rooms {
        for link in room.links.iter().filter(|l| l.map.trim().is_empty()) {
            result.push(
                Diagnostic::warning(
                    "maze::validate::empty-map",
                    format!("link to room {} has no map coordinates", link.dir),
                )
                .in_room(room.number)
                .with_help("Set `map` to the polygon coordinates of the clickable area"),
            );
        }
    }

    result
}

pub fn check_self_links(document: &Document) -> ValidationResult {
    let mut result = ValidationResult::new();

    for room in &document.rooms {
        if room.links.iter().any(|l| l.dir == room.number) {
            result.push(
                Diagnostic::warning("maze::validate::self-link", "links to itself")
                    .in_room(room.number),
            );
        }
    }

    result
}
