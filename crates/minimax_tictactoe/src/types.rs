//! Core domain types for tic-tac-toe.

use crate::action::Move;
use crate::error::ParseBoardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Player {
    /// Player X (goes first, maximizes).
    X,
    /// Player O (goes second, minimizes).
    O,
}

impl Player {
    /// Returns the square this player's mark occupies.
    pub fn mark(self) -> Square {
        Square::Occupied(self)
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used by the text board format.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }

    /// Parses a single cell character: `X`, `O`, or one of `.`, `_`, `-` for empty.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' | '_' | '-' => Some(Square::Empty),
            'X' => Some(Square::Occupied(Player::X)),
            'O' => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are immutable values: a move produces a new board through
/// [`crate::result`] and the parent is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed as `[row][col]`.
    squares: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; 3]; 3],
        }
    }

    /// Creates a board from explicit rows.
    ///
    /// No turn-order validation is performed; see [`Board::is_reachable_counts`].
    pub fn from_rows(squares: [[Square; 3]; 3]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given move coordinates, `None` when out of range.
    pub fn get(&self, mv: Move) -> Option<Square> {
        self.squares.get(mv.row)?.get(mv.col).copied()
    }

    /// Checks if the square at the given coordinates exists and is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Square::Empty))
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.squares
    }

    /// Iterates over every square in row-major order with its coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Square)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, squares)| {
            squares
                .iter()
                .enumerate()
                .map(move |(col, &square)| (Move::new(row, col), square))
        })
    }

    /// Counts squares equal to `square`.
    pub fn count(&self, square: Square) -> usize {
        self.squares.iter().flatten().filter(|&&s| s == square).count()
    }

    /// Checks if the board has no empty squares.
    pub fn is_full(&self) -> bool {
        self.count(Square::Empty) == 0
    }

    /// True when X has as many marks as O or exactly one more.
    ///
    /// Every board reached by alternating play from the empty board satisfies this.
    pub fn is_reachable_counts(&self) -> bool {
        let x = self.count(Player::X.mark());
        let o = self.count(Player::O.mark());
        x == o || x == o + 1
    }

    /// Returns a copy of this board with `square` written at `mv`.
    ///
    /// Callers guarantee `mv` is in range.
    pub(crate) fn with_square(mut self, mv: Move, square: Square) -> Self {
        self.squares[mv.row][mv.col] = square;
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, squares) in self.squares.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for square in squares {
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cell characters, ignoring `/`, `|` and whitespace.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '/' | '|'))
            .collect();

        if symbols.len() != 9 {
            return Err(ParseBoardError::WrongLength {
                got: symbols.len(),
            });
        }

        let mut squares = [[Square::Empty; 3]; 3];
        for (index, &symbol) in symbols.iter().enumerate() {
            squares[index / 3][index % 3] = Square::from_symbol(symbol)
                .ok_or(ParseBoardError::InvalidCharacter { symbol, index })?;
        }

        Ok(Self { squares })
    }
}

/// Final result of a game, scored from X's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// X completed a line.
    XWins,
    /// O completed a line.
    OWins,
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// Numeric value: +1, -1 or 0.
    pub fn value(self) -> i8 {
        match self {
            Outcome::XWins => 1,
            Outcome::OWins => -1,
            Outcome::Draw => 0,
        }
    }

    /// Maps a utility value back to an outcome by its sign.
    pub fn from_utility(value: i8) -> Self {
        match value.signum() {
            1 => Outcome::XWins,
            -1 => Outcome::OWins,
            _ => Outcome::Draw,
        }
    }

    /// The winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::XWins => write!(f, "X wins"),
            Outcome::OWins => write!(f, "O wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(board.get(Move::new(0, 1)), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(Move::new(1, 0)), Some(Square::Occupied(Player::O)));
        assert_eq!(board.to_string(), "XX.\nOO.\n...");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = "XO".parse::<Board>().unwrap_err();
        assert_eq!(err, ParseBoardError::WrongLength { got: 2 });
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let err = "XO?......".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            ParseBoardError::InvalidCharacter {
                symbol: '?',
                index: 2
            }
        );
    }

    #[test]
    fn test_parse_only_documented_symbols() {
        let board: Board = "X_-/O../...".parse().unwrap();
        assert_eq!(board.count(Square::Empty), 7);

        for (text, symbol) in [("0........", '0'), ("x........", 'x'), ("o........", 'o')] {
            let err = text.parse::<Board>().unwrap_err();
            assert_eq!(err, ParseBoardError::InvalidCharacter { symbol, index: 0 });
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(Move::new(3, 0)), None);
        assert!(!board.is_empty(Move::new(0, 3)));
    }

    #[test]
    fn test_reachable_counts() {
        assert!(Board::new().is_reachable_counts());
        assert!("X........".parse::<Board>().unwrap().is_reachable_counts());
        assert!(!"O........".parse::<Board>().unwrap().is_reachable_counts());
        assert!(!"XX.......".parse::<Board>().unwrap().is_reachable_counts());
    }

    #[test]
    fn test_player_marks() {
        use strum::IntoEnumIterator;

        let marks: Vec<Square> = Player::iter().map(Player::mark).collect();
        assert_eq!(marks, vec![Square::Occupied(Player::X), Square::Occupied(Player::O)]);
        assert_eq!(Player::O.to_string(), "O");
    }

    #[test]
    fn test_outcome_from_utility() {
        assert_eq!(Outcome::from_utility(1), Outcome::XWins);
        assert_eq!(Outcome::from_utility(-1), Outcome::OWins);
        assert_eq!(Outcome::from_utility(0), Outcome::Draw);
        assert_eq!(Outcome::OWins.winner(), Some(Player::O));
    }
}
