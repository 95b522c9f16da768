use log::trace;
use std::fmt;

use crate::error::{PuzzleError, Result};
use crate::geometry::{Grid, Move};

pub const MIN_SIDE: usize = 2;

/// Names a tile by its home slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    home: usize,
    current: usize,
}

impl Tile {
    pub fn id(&self) -> TileId {
        TileId(self.home)
    }

    pub fn home_position(&self) -> usize {
        self.home
    }

    pub fn current_position(&self) -> usize {
        self.current
    }

    pub fn is_home(&self) -> bool {
        self.current == self.home
    }
}

/// The board: every tile's slot plus the blank.
///
/// Tiles are stored in home order, so `tiles[home - 1]` is the tile with that home. The only
/// way to change the board is [`Puzzle::apply_move`], which keeps the current slots and the
/// blank a permutation of `1..=N²`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    tiles: Vec<Tile>,
    blank: usize,
}

impl Puzzle {
    /// A solved puzzle of side `side`, blank in the bottom-right slot.
    pub fn new(side: usize) -> Result<Self> {
        if side < MIN_SIDE {
            return Err(PuzzleError::SideTooSmall {
                side,
                min: MIN_SIDE,
            });
        }
        let slots = side
            .checked_mul(side)
            .ok_or(PuzzleError::SideTooLarge(side))?;

        let tiles = (1..slots)
            .map(|home| Tile {
                home,
                current: home,
            })
            .collect();

        Ok(Self {
            grid: Grid::new(side),
            tiles,
            blank: slots,
        })
    }

    /// Builds a solved puzzle from the home slots of a prepared tile set.
    ///
    /// The homes may arrive in any order but must be exactly `1..N²` for some side `N >= 2`.
    pub fn from_homes(homes: &[usize]) -> Result<Self> {
        let count = homes.len();
        let side = square_side(count + 1).ok_or(PuzzleError::NotSquare { count })?;
        if side < MIN_SIDE {
            return Err(PuzzleError::NotSquare { count });
        }

        let mut seen = vec![false; count];
        for &home in homes {
            if home == 0 || home > count {
                return Err(PuzzleError::HomeOutOfRange { home, max: count });
            }
            if std::mem::replace(&mut seen[home - 1], true) {
                return Err(PuzzleError::DuplicateHome(home));
            }
        }

        Self::new(side)
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn side(&self) -> usize {
        self.grid.side()
    }

    pub fn blank_slot(&self) -> usize {
        self.blank
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        id.0.checked_sub(1).and_then(|i| self.tiles.get(i))
    }

    pub fn tile_at(&self, slot: usize) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.current == slot)
    }

    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(Tile::is_home)
    }

    /// The tile that slides into the blank when the blank moves `direction`.
    ///
    /// `None` when the blank is already on that edge of the board.
    pub fn find_movable_tile(&self, direction: Move) -> Option<TileId> {
        let slide = direction.opposite();
        self.tiles
            .iter()
            .find(|tile| self.grid.is_adjacent(tile.current, self.blank, slide))
            .map(Tile::id)
    }

    /// Swaps `tile` with the blank.
    ///
    /// # Panics
    ///
    /// If `tile` is not the tile [`Puzzle::find_movable_tile`] returns for `direction`.
    pub fn apply_move(&mut self, tile: TileId, direction: Move) {
        let blank = self.blank;
        let grid = self.grid;
        let index = tile
            .0
            .checked_sub(1)
            .filter(|&i| i < self.tiles.len())
            .unwrap_or_else(|| panic!("no tile with home {} on this board", tile.0));
        let entry = &mut self.tiles[index];

        assert!(
            grid.is_adjacent(entry.current, blank, direction.opposite()),
            "tile {} at slot {} cannot move {} into blank slot {}",
            tile.0,
            entry.current,
            direction,
            blank
        );

        trace!("{}: tile {} {} -> {}", direction, tile.0, entry.current, blank);
        self.blank = std::mem::replace(&mut entry.current, blank);
    }

    /// Moves the blank `direction` if a tile can slide, returning the tile that moved.
    pub fn try_move(&mut self, direction: Move) -> Option<TileId> {
        let tile = self.find_movable_tile(direction)?;
        self.apply_move(tile, direction);
        Some(tile)
    }
}

fn square_side(slots: usize) -> Option<usize> {
    let mut side = 1usize;
    while side.checked_mul(side)? < slots {
        side += 1;
    }
    (side * side == slots).then_some(side)
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut board = vec![0; self.grid.slot_count()];
        for tile in &self.tiles {
            board[tile.current - 1] = tile.home;
        }

        let width = self.grid.slot_count().to_string().len();
        for row in board.chunks(self.side()) {
            for &val in row {
                write!(f, "{:>width$} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
