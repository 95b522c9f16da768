//! The computer player that shuffles the board before the human takes over.
//!
//! Every step is a legal slide or nothing at all, so whatever state comes out is reachable
//! from solved and can be undone by replaying the applied moves backwards.

use log::debug;
use rand::Rng;

use crate::geometry::Move;
use crate::puzzle::Puzzle;

pub const DEFAULT_SCRAMBLE_MOVES: usize = 100;

/// Supplies the directions the computer player tries.
pub trait DirectionSource {
    fn next_move(&mut self) -> Move;
}

/// Picks each direction uniformly from an [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomDirections<R> {
    rng: R,
}

impl<R: Rng> RandomDirections<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DirectionSource for RandomDirections<R> {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.rng.gen_range(0..Move::ALL.len())]
    }
}

/// One attempt: returns the move if a tile actually slid.
pub fn scramble_step<S>(puzzle: &mut Puzzle, source: &mut S) -> Option<Move>
where
    S: DirectionSource + ?Sized,
{
    let direction = source.next_move();
    puzzle.try_move(direction).map(|_| direction)
}

/// Spends `attempts` random directions on the board.
///
/// Attempts that point off the board are used up without moving anything, so the returned
/// list of applied moves can be shorter than `attempts`.
pub fn scramble<S>(puzzle: &mut Puzzle, attempts: usize, source: &mut S) -> Vec<Move>
where
    S: DirectionSource + ?Sized,
{
    let applied: Vec<Move> = (0..attempts)
        .filter_map(|_| scramble_step(puzzle, source))
        .collect();

    debug!(
        "scramble applied {} of {} attempted moves",
        applied.len(),
        attempts
    );
    applied
}
