//! Error types for tic-tac-toe rules.

use crate::action::Move;
use derive_more::{Display, Error};

/// Why a move could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMoveKind {
    /// Row or column outside `0..3`.
    #[display("out of bounds")]
    OutOfBounds,
    /// The targeted cell already holds a mark.
    #[display("already occupied")]
    Occupied,
}

/// A move that cannot be applied to the board it was played on.
///
/// Returned by [`crate::result`]; the caller decides whether to re-prompt
/// or abort, the rules never continue with a stale board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid move {}: square {}", mv, kind)]
pub struct InvalidMove {
    /// The rejected move.
    pub mv: Move,
    /// What was wrong with it.
    pub kind: InvalidMoveKind,
}

impl InvalidMove {
    /// Creates a new invalid move error.
    pub fn new(mv: Move, kind: InvalidMoveKind) -> Self {
        Self { mv, kind }
    }
}

/// Errors from parsing the text board format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Not exactly nine cells after removing separators.
    #[display("Expected 9 cells, got {}", got)]
    WrongLength {
        /// Number of cell characters found.
        got: usize,
    },
    /// A character that is neither a mark nor an empty marker.
    #[display("Invalid cell character {:?} at index {}", symbol, index)]
    InvalidCharacter {
        /// The offending character.
        symbol: char,
        /// Cell index (0-8) where it appeared.
        index: usize,
    },
}
