//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::Board;
use tracing::instrument;

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board where X completed the main diagonal
        let board: Board = "XOO/OXX/OXX".parse().unwrap();
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
