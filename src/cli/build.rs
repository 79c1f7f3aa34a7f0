//! Build implementation.
//!
//! Loads a maze document, validates it, and writes one passage file per
//! room plus the startup passage.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::document::{Document, RoomNumber};
use crate::error::{MazeError, Result};
use crate::index::RoomTypeIndex;
use crate::output::{display_path, plural, Printer};
use crate::render::{startup_lines, RoomRenderer};
use crate::validation::{print_diagnostics, validate_document};

use super::Cli;

/// Name of the startup passage file.
pub const STARTUP_FILENAME: &str = "init.txt";

/// Passage filename for a room: `room-07.txt`.
pub fn room_filename(number: RoomNumber) -> String {
    format!("room-{}.txt", number.padded())
}

/// What a build wrote, in write order.
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub rooms: usize,
    pub files: Vec<PathBuf>,
}

pub fn run(cli: &Cli, printer: &Printer) -> Result<()> {
    let path = cli.document.as_deref().ok_or_else(|| MazeError::Parse {
        message: "No maze document given".to_string(),
        help: Some("usage: maze CONFIGFILE".to_string()),
    })?;
    let config = cli.resolve_config()?;

    printer.status("Loading", &display_path(path));
    let document = Document::load(path)?;
    let index = RoomTypeIndex::build(&document.rooms);

    let report = validate_document(&document, &index);
    print_diagnostics(&report, printer);
    let report = report.into_result()?;

    if cli.check {
        printer.status(
            "Checked",
            &format!(
                "{} ({})",
                plural(document.len(), "room", "rooms"),
                plural(report.warning_count(), "warning", "warnings")
            ),
        );
        return Ok(());
    }

    let summary = write_twine_rooms(&document, &index, &config, printer)?;
    printer.status(
        "Finished",
        &format!(
            "{} to {}",
            plural(summary.rooms, "room", "rooms"),
            display_path(&config.output)
        ),
    );

    Ok(())
}

/// Write the startup passage and every room passage into `config.output`.
///
/// Stops at the first room that fails to render; files already written
/// stay on disk.
pub fn write_twine_rooms(
    document: &Document,
    index: &RoomTypeIndex,
    config: &Config,
    printer: &Printer,
) -> Result<BuildSummary> {
    if !config.output.exists() {
        fs::create_dir_all(&config.output).map_err(|e| MazeError::Io {
            path: config.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut summary = BuildSummary::default();

    let startup_path = config.output.join(STARTUP_FILENAME);
    write_lines(&startup_path, &startup_lines(config))?;
    printer.status("Writing", &display_path(&startup_path));
    summary.files.push(startup_path);

    let renderer = RoomRenderer::new(index, config);

    for room in &document.rooms {
        let lines = renderer.render(room)?;
        let path = config.output.join(room_filename(room.number));

        write_lines(&path, &lines)?;
        printer.status("Writing", &display_path(&path));

        summary.rooms += 1;
        summary.files.push(path);
    }

    Ok(summary)
}

/// Write lines to a file, each terminated by a newline.
fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }

    fs::write(path, content).map_err(|e| MazeError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write passage: {}", e),
    })
}
