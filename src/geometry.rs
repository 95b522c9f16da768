use std::fmt;

/// A move on the board, named by where the blank goes.
///
/// `Up` means the tile directly above the blank slides down into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row and column step, with rows growing downwards.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Left => (0, -1),
            Move::Down => (1, 0),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Slot arithmetic for an N×N board.
///
/// Slots are numbered `1..=N²` in row-major order; rows and columns are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    side: usize,
}

impl Grid {
    pub(crate) const fn new(side: usize) -> Self {
        Self { side }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn slot_count(&self) -> usize {
        self.side * self.side
    }

    pub fn row_of(&self, slot: usize) -> usize {
        (slot - 1) / self.side
    }

    pub fn col_of(&self, slot: usize) -> usize {
        (slot - 1) % self.side
    }

    pub fn slot_at(&self, row: usize, col: usize) -> usize {
        row * self.side + col + 1
    }

    /// True if a tile at `from` sliding one step in `direction` lands on `to`.
    pub fn is_adjacent(&self, from: usize, to: usize, direction: Move) -> bool {
        match direction {
            Move::Up => self.row_of(from) > 0 && to + self.side == from,
            Move::Down => self.row_of(from) < self.side - 1 && to == from + self.side,
            Move::Right => self.col_of(from) < self.side - 1 && to == from + 1,
            Move::Left => self.col_of(from) > 0 && to + 1 == from,
        }
    }

    /// The slot one step from `slot` in `direction`, if it is still on the board.
    pub fn neighbor(&self, slot: usize, direction: Move) -> Option<usize> {
        let (dr, dc) = direction.as_offset();
        let row = self.row_of(slot).checked_add_signed(dr)?;
        let col = self.col_of(slot).checked_add_signed(dc)?;

        if row < self.side && col < self.side {
            Some(self.slot_at(row, col))
        } else {
            None
        }
    }
}
