//! Maze document loading.
//!
//! A document is a mapping with a `rooms` key holding an ordered list of
//! rooms. YAML is the usual format; `.json` files are read as JSON.
//!
//! ```yaml
//! rooms:
//!   - number: 1
//!     type: cave
//!     intro: A damp cave.
//!     text: |
//!       Water drips from the ceiling.
//!
//!       A passage leads east.
//!     links:
//!       - dir: 2
//!         map: "10,10,50,10,50,90,10,90"
//! ```

mod types;

pub use types::{Link, Room, RoomNumber, TypeTag};

use std::path::Path;

use serde::Deserialize;

use crate::error::{MazeError, Result};

const SHAPE_HELP: &str =
    "Each room needs `number`, `type`, `intro` and `text`; each link needs `dir` and `map`";

/// The full set of rooms, loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    pub rooms: Vec<Room>,
}

impl Document {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    /// Load a document from disk, picking the format from the extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MazeError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read maze document: {}", e),
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse a document from YAML.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| MazeError::Parse {
            message: format!("Invalid maze document: {}", e),
            help: Some(SHAPE_HELP.to_string()),
        })
    }

    /// Parse a document from JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| MazeError::Parse {
            message: format!("Invalid maze document: {}", e),
            help: Some(SHAPE_HELP.to_string()),
        })
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
