//! A sliding tile picture puzzle.
//!
//! The board is N×N slots numbered `1..=N²` row-major, with one blank slot. A computer player
//! scrambles the solved board with random legal slides, and the player slides tiles back until
//! every tile is home again.

pub mod config;
pub mod error;
pub mod geometry;
pub mod puzzle;
pub mod scramble;
pub mod session;
pub mod terminal;

pub use error::{AppError, PuzzleError, Result};
pub use geometry::{Grid, Move};
pub use puzzle::{Puzzle, Tile, TileId};
pub use scramble::{scramble, DirectionSource, RandomDirections};
pub use session::{Phase, Session, Turn};
