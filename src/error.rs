use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = PuzzleError> = std::result::Result<T, E>;

/// Reasons a puzzle cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("grid side must be at least {min}, got {side}")]
    SideTooSmall { side: usize, min: usize },

    #[error("grid side {0} is too large to number its slots")]
    SideTooLarge(usize),

    #[error("{count} tiles cannot fill a square board of side 2 or more with one blank slot")]
    NotSquare { count: usize },

    #[error("home position {home} is outside 1..={max}")]
    HomeOutOfRange { home: usize, max: usize },

    #[error("home position {0} is assigned to more than one tile")]
    DuplicateHome(usize),
}

/// Everything the binary can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
