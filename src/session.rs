//! Drives one game from the scramble to the win.

use log::{debug, info};

use crate::geometry::Move;
use crate::puzzle::Puzzle;
use crate::scramble::{scramble_step, DirectionSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The computer player still has `remaining` attempts to spend.
    Scrambling { remaining: usize },
    Playing,
    Solved,
}

/// What a player input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Moved,
    /// Nothing can slide that way.
    Blocked,
    /// The move put the last tile home.
    Solved,
    /// Input arrived outside the playing phase.
    Ignored,
}

pub struct Session<S> {
    puzzle: Puzzle,
    source: S,
    phase: Phase,
    moves_made: usize,
}

impl<S: DirectionSource> Session<S> {
    pub fn new(puzzle: Puzzle, scramble_moves: usize, source: S) -> Self {
        let mut session = Self {
            puzzle,
            source,
            phase: Phase::Scrambling {
                remaining: scramble_moves,
            },
            moves_made: 0,
        };
        if scramble_moves == 0 {
            session.finish_scramble();
        }
        session
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    /// Once solved the front end shows the missing last tile in the blank slot.
    pub fn final_tile_revealed(&self) -> bool {
        self.phase == Phase::Solved
    }

    /// Advances the scramble by one attempt. Returns the move if a tile slid.
    pub fn tick(&mut self) -> Option<Move> {
        let Phase::Scrambling { remaining } = self.phase else {
            return None;
        };

        let applied = scramble_step(&mut self.puzzle, &mut self.source);
        self.phase = Phase::Scrambling {
            remaining: remaining - 1,
        };
        if remaining == 1 {
            self.finish_scramble();
        }
        applied
    }

    /// Spends whatever is left of the scramble budget at once.
    pub fn scramble_all(&mut self) {
        while let Phase::Scrambling { .. } = self.phase {
            self.tick();
        }
    }

    pub fn play(&mut self, direction: Move) -> Turn {
        if self.phase != Phase::Playing {
            debug!("ignoring {} in phase {:?}", direction, self.phase);
            return Turn::Ignored;
        }

        let Some(tile) = self.puzzle.find_movable_tile(direction) else {
            return Turn::Blocked;
        };
        self.puzzle.apply_move(tile, direction);
        self.moves_made += 1;

        if self.puzzle.is_solved() {
            info!("solved after {} moves", self.moves_made);
            self.phase = Phase::Solved;
            Turn::Solved
        } else {
            Turn::Moved
        }
    }

    fn finish_scramble(&mut self) {
        if self.puzzle.is_solved() {
            info!("scramble ended on the solved board");
            self.phase = Phase::Solved;
        } else {
            info!("scramble finished, player's turn");
            self.phase = Phase::Playing;
        }
    }
}
