//! Optimal tic-tac-toe.
//!
//! Pure game-state queries over an immutable 3x3 [`Board`] and a
//! full-depth minimax search for the player to move.
//!
//! # Architecture
//!
//! - **Types**: board, squares, players and outcomes
//! - **Rules**: turn order, legal moves, move application, win/draw detection
//! - **Search**: mutually recursive `max_value`/`min_value` driving `minimax`
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{initial_state, minimax, result, terminal, utility};
//!
//! let mut board = initial_state();
//! while !terminal(&board) {
//!     let mv = minimax(&board).expect("non-terminal board has a move");
//!     board = result(&board, mv)?;
//! }
//! assert_eq!(utility(&board), 0);
//! # Ok::<(), minimax_tictactoe::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
pub mod rules;
pub mod search;
mod types;

pub use action::Move;
pub use error::{InvalidMove, InvalidMoveKind, ParseBoardError};
pub use types::{Board, Outcome, Player, Square};

pub use rules::{
    actions, initial_state, is_draw, outcome, player, result, terminal, utility, winner,
    winning_line,
};
pub use search::{max_value, min_value, minimax, principal_variation, score_moves, value};
