//! Exhaustive minimax search.
//!
//! X maximizes and O minimizes the utility of the final board. The tree is
//! searched to full depth with no pruning or memoization; depth is bounded
//! by the number of empty squares, so recursion never exceeds nine plies.

use crate::rules::{player, successors, terminal, utility};
use crate::{Board, Move, Player};
use tracing::{debug, instrument};

/// Best utility X can force from `board`, assuming optimal play by both sides.
pub fn max_value(board: &Board) -> i8 {
    if terminal(board) {
        return utility(board);
    }

    successors(board)
        .map(|(_, child)| min_value(&child))
        .max()
        .unwrap_or_else(|| utility(board))
}

/// Best utility O can force from `board`, assuming optimal play by both sides.
pub fn min_value(board: &Board) -> i8 {
    if terminal(board) {
        return utility(board);
    }

    successors(board)
        .map(|(_, child)| max_value(&child))
        .min()
        .unwrap_or_else(|| utility(board))
}

/// Game-theoretic value of `board` with the side to move playing first.
#[instrument(skip(board))]
pub fn value(board: &Board) -> i8 {
    match player(board) {
        Some(Player::X) => max_value(board),
        Some(Player::O) => min_value(board),
        None => utility(board),
    }
}

/// Every legal move with the value its successor is worth under optimal play.
///
/// Moves are listed in row-major order. Empty for terminal boards.
#[instrument(skip(board))]
pub fn score_moves(board: &Board) -> Vec<(Move, i8)> {
    scored_successors(board)
        .into_iter()
        .map(|(mv, _, score)| (mv, score))
        .collect()
}

/// Returns the optimal move for the player to move.
///
/// X takes the move with the strictly greatest value and O the strictly
/// least; among equal values the first in row-major order is kept.
/// Returns `None` when the board is terminal.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax(board: &Board) -> Option<Move> {
    let (mv, _, score) = best_successor(board)?;
    debug!(%mv, score, "Selected move");
    Some(mv)
}

/// Optimal line of play from `board` until the game ends.
#[instrument(skip(board))]
pub fn principal_variation(board: &Board) -> Vec<Move> {
    let mut line = Vec::new();
    let mut current = *board;

    while let Some((mv, next, _)) = best_successor(&current) {
        line.push(mv);
        current = next;
    }

    line
}

fn scored_successors(board: &Board) -> Vec<(Move, Board, i8)> {
    if terminal(board) {
        return Vec::new();
    }

    let Some(to_move) = player(board) else {
        return Vec::new();
    };

    successors(board)
        .map(|(mv, child)| {
            let score = match to_move {
                Player::X => min_value(&child),
                Player::O => max_value(&child),
            };
            (mv, child, score)
        })
        .collect()
}

fn best_successor(board: &Board) -> Option<(Move, Board, i8)> {
    let to_move = player(board)?;
    let mut best: Option<(Move, Board, i8)> = None;

    for candidate in scored_successors(board) {
        let improves = match best {
            None => true,
            Some((_, _, best_score)) => match to_move {
                Player::X => candidate.2 > best_score,
                Player::O => candidate.2 < best_score,
            },
        };
        if improves {
            best = Some(candidate);
        }
    }

    best
}
