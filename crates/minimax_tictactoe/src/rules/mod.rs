//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search engine can compose them freely.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, winner, winning_line};

use crate::error::{InvalidMove, InvalidMoveKind};
use crate::{Board, Move, Outcome, Player, Square};
use tracing::{instrument, trace};

/// Returns the starting board: every square empty.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player whose turn it is.
///
/// X moves whenever the mark counts are equal (including the empty board),
/// O moves when X is ahead. A full board has no player to move and yields
/// `None`.
#[instrument(skip(board))]
pub fn player(board: &Board) -> Option<Player> {
    if board.is_full() {
        return None;
    }

    let x_count = board.count(Player::X.mark());
    let o_count = board.count(Player::O.mark());
    trace!(x_count, o_count, "Counted marks");

    if x_count > o_count {
        Some(Player::O)
    } else {
        Some(Player::X)
    }
}

/// Returns every empty cell in row-major order.
#[instrument(skip(board))]
pub fn actions(board: &Board) -> Vec<Move> {
    board
        .cells()
        .filter(|&(_, square)| square == Square::Empty)
        .map(|(mv, _)| mv)
        .collect()
}

/// Returns the board that results from the player to move marking `mv`.
///
/// The input board is never modified.
///
/// # Errors
///
/// Returns [`InvalidMove`] if the coordinates are off the grid or the
/// targeted square is already occupied.
#[instrument(skip(board), fields(mv = %mv))]
pub fn result(board: &Board, mv: Move) -> Result<Board, InvalidMove> {
    if !mv.in_bounds() {
        return Err(InvalidMove::new(mv, InvalidMoveKind::OutOfBounds));
    }

    if !board.is_empty(mv) {
        return Err(InvalidMove::new(mv, InvalidMoveKind::Occupied));
    }

    // An empty target means the board is not full, so someone is to move.
    let to_move = player(board).ok_or(InvalidMove::new(mv, InvalidMoveKind::Occupied))?;

    Ok(board.with_square(mv, to_move.mark()))
}

/// True when someone has won or no squares remain.
#[instrument(skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Scores a finished board from X's perspective: 1, -1 or 0.
///
/// Meant for terminal boards; a game still in progress scores 0.
#[instrument(skip(board))]
pub fn utility(board: &Board) -> i8 {
    outcome(board).map_or(0, Outcome::value)
}

/// Returns the outcome of a finished game, `None` while it is in progress.
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(Player::X) => Some(Outcome::XWins),
        Some(Player::O) => Some(Outcome::OWins),
        None => is_draw(board).then_some(Outcome::Draw),
    }
}

/// Every legal move paired with the board it produces.
///
/// Moves come from [`actions`], so the placement cannot fail and the
/// search engine never has to handle [`InvalidMove`].
pub(crate) fn successors(board: &Board) -> impl Iterator<Item = (Move, Board)> {
    let parent = *board;
    let mark = player(board).map(Player::mark);

    actions(board)
        .into_iter()
        .filter_map(move |mv| mark.map(|mark| (mv, parent.with_square(mv, mark))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_alternates() {
        let board = initial_state();
        assert_eq!(player(&board), Some(Player::X));

        let board = result(&board, Move::new(1, 1)).unwrap();
        assert_eq!(player(&board), Some(Player::O));

        let board = result(&board, Move::new(0, 0)).unwrap();
        assert_eq!(player(&board), Some(Player::X));
    }

    #[test]
    fn test_player_none_on_full_board() {
        let board: Board = "XOX/OXO/OXO".parse().unwrap();
        assert_eq!(player(&board), None);
    }

    #[test]
    fn test_actions_row_major() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        assert_eq!(
            actions(&board),
            vec![
                Move::new(0, 1),
                Move::new(1, 0),
                Move::new(1, 2),
                Move::new(2, 1),
                Move::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_result_out_of_bounds() {
        let err = result(&initial_state(), Move::new(0, 3)).unwrap_err();
        assert_eq!(err.kind, InvalidMoveKind::OutOfBounds);
        assert_eq!(err.mv, Move::new(0, 3));
    }

    #[test]
    fn test_result_occupied_on_full_board() {
        let board: Board = "XOX/OXO/OXO".parse().unwrap();
        let err = result(&board, Move::new(2, 2)).unwrap_err();
        assert_eq!(err.kind, InvalidMoveKind::Occupied);
    }

    #[test]
    fn test_outcome() {
        assert_eq!(outcome(&initial_state()), None);
        let won: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(outcome(&won), Some(Outcome::OWins));
        let drawn: Board = "XOX/OXO/OXO".parse().unwrap();
        assert_eq!(outcome(&drawn), Some(Outcome::Draw));
    }

    #[test]
    fn test_successors_match_result() {
        let board: Board = "X../.O./...".parse().unwrap();
        let children: Vec<_> = successors(&board).collect();
        assert_eq!(children.len(), actions(&board).len());
        for (mv, child) in children {
            assert_eq!(Ok(child), result(&board, mv));
        }
    }
}
