//! maze2twine - Twine passage generator for image-map mazes
//!
//! A library for turning a YAML description of rooms, links and image-map
//! regions into Harlowe passages: one file per room plus a startup passage.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod output;
pub mod render;
pub mod validation;

pub use cli::build::{room_filename, write_twine_rooms, BuildSummary, STARTUP_FILENAME};
pub use config::Config;
pub use document::{Document, Link, Room, RoomNumber, TypeTag};
pub use error::{MazeError, Result};
pub use index::RoomTypeIndex;
pub use render::{startup_lines, RoomRenderer};
pub use validation::{validate_document, Diagnostic, Severity, ValidationResult};
