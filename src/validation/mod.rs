//! Validation for maze documents.
//!
//! Runs before anything is written so a bad document fails without
//! leaving a half-built output directory behind. Used by both
//! `maze --check` and a normal build.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::document::Document;
use crate::index::RoomTypeIndex;
use crate::output::Printer;

/// Run all checks against the document.
pub fn validate_document(document: &Document, index: &RoomTypeIndex) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_duplicate_rooms(document));
    result.merge(checks::check_room_numbers(document));
    result.merge(checks::check_link_targets(document, index));
    result.merge(checks::check_link_maps(document));
    result.merge(checks::check_self_links(document));

    result
}

/// Print every diagnostic with a coloured severity label.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.is_error());
        eprintln!("{}[{}]: {}", label, d.code, d);
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Room;

    fn validate(rooms: Vec<Room>) -> ValidationResult {
        let document = Document::new(rooms);
        let index = RoomTypeIndex::build(&document.rooms);
        validate_document(&document, &index)
    }

    #[test]
    fn test_validate_empty_document() {
        assert!(validate(vec![]).is_clean());
    }

    #[test]
    fn test_validate_valid_maze() {
        let result = validate(vec![
            Room::new(1, "cave", "i", "t").with_link(2, "0,0,1,1"),
            Room::new(2, "hall", "i", "t").with_link(1, "0,0,1,1"),
        ]);
        assert!(result.is_clean());
    }

    #[test]
    fn test_validate_collects_all_problems() {
        let result = validate(vec![
            Room::new(1, "cave", "i", "t").with_link(5, ""),
            Room::new(1, "cave", "i", "t"),
        ]);

        // duplicate + unknown target
        assert_eq!(result.error_count(), 2);
        // empty map
        assert_eq!(result.warning_count(), 1);
    }
}
