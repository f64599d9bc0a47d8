//! Win detection logic for tic-tac-toe.

use crate::{Board, Move, Player, Square};
use tracing::instrument;

/// The eight lines, in scan order: rows, columns, main diagonal, anti-diagonal.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the player holding three in a row, if any.
///
/// Lines are checked in [`LINES`] order and the first complete one wins.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    let rows = board.rows();

    for [a, b, c] in LINES {
        let sq = rows[a.0][a.1];
        if sq == rows[b.0][b.1]
            && sq == rows[c.0][c.1]
            && let Square::Occupied(player) = sq
        {
            return Some(player);
        }
    }

    None
}

/// Returns the cells of the first complete line, if any.
pub fn winning_line(board: &Board) -> Option<[Move; 3]> {
    let player = winner(board)?;
    LINES
        .iter()
        .copied()
        .map(|line| line.map(Move::from))
        .find(|line| line.iter().all(|&mv| board.get(mv) == Some(player.mark())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_every_line() {
        for line in LINES {
            let mut board = Board::new();
            for cell in line {
                board = board.with_square(Move::from(cell), Square::Occupied(Player::O));
            }
            assert_eq!(winner(&board), Some(Player::O), "line {line:?}");
            assert_eq!(winning_line(&board), Some(line.map(Move::from)));
        }
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO/XO./O..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_no_winner_full_board() {
        let board: Board = "XOX/OXO/OXO".parse().unwrap();
        assert_eq!(winner(&board), None);
    }
}
