use miette::Diagnostic;
use thiserror::Error;

/// Main error type for maze operations
#[derive(Error, Diagnostic, Debug)]
pub enum MazeError {
    #[error("IO error: {0}")]
    #[diagnostic(code(maze::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(maze::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(maze::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Room {room} links to room {dir}, which does not exist")]
    #[diagnostic(
        code(maze::render),
        help("Every link's `dir` must match the `number` of a room in the document")
    )]
    UnknownRoom { room: u32, dir: u32 },

    #[error("Validation error: {message}")]
    #[diagnostic(code(maze::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, MazeError>;
