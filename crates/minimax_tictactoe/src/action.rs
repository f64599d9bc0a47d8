//! Move coordinates for tic-tac-toe.
//!
//! A move names a cell, not a player: whose mark lands there is decided
//! by the board it is applied to.

use serde::{Deserialize, Serialize};

/// A zero-based `(row, col)` pair identifying one cell.
///
/// Only meaningful relative to a specific board: the coordinates must be
/// in `0..3` and the targeted cell must be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a move from a row-major cell index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self::new(index / 3, index % 3))
    }

    /// True when both coordinates fall on the 3x3 grid.
    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
