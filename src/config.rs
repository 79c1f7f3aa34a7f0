//! Render configuration.
//!
//! Holds the presentation values baked into generated passages (image
//! directory, intro style, image extension) and the output directory.
//! Values come from defaults, an optional YAML file, then CLI flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};

/// Configuration threaded through the renderers and the writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tool-side directory holding room images. Never read from disk.
    pub image_dir: String,

    /// Harlowe text style applied to intro lines.
    pub intro_style: String,

    /// Extension of room images (without the dot).
    pub image_ext: String,

    /// Directory that receives the generated passage files.
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_dir: "images".to_string(),
            intro_style: "bold".to_string(),
            image_ext: "jpg".to_string(),
            output: PathBuf::from("mazerooms"),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MazeError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| MazeError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Known keys: image_dir, intro_style, image_ext, output".to_string()),
        })
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_image_dir(mut self, image_dir: impl Into<String>) -> Self {
        self.image_dir = image_dir.into();
        self
    }
}
