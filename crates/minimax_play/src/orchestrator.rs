//! Match orchestration between two participants.

use crate::participants::Participant;
use anyhow::{Result, bail};
use minimax_tictactoe::{Board, Move, Outcome, Player, initial_state, outcome, player, result};
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument, warn};

/// Summary of a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    /// How the game ended.
    pub outcome: Outcome,
    /// Moves in the order they were played, X first.
    pub moves: Vec<Move>,
    /// Board after the last move.
    pub final_board: Board,
}

/// Drives a game from the empty board to a terminal position.
pub struct Match<'a, W> {
    x: &'a mut dyn Participant,
    o: &'a mut dyn Participant,
    out: W,
}

impl<'a, W: Write> Match<'a, W> {
    /// Creates a new match; `x` moves first.
    pub fn new(x: &'a mut dyn Participant, o: &'a mut dyn Participant, out: W) -> Self {
        Self { x, o, out }
    }

    /// Runs the game loop until the rules report a terminal board.
    ///
    /// Illegal squares from a participant that may retry are reported and
    /// asked again; from any other participant they abort the match.
    #[instrument(skip(self), fields(x = %self.x.name(), o = %self.o.name()))]
    pub fn run(&mut self) -> Result<MatchReport> {
        info!("Starting match");
        let mut board = initial_state();
        let mut moves = Vec::new();

        writeln!(self.out, "{board}\n")?;

        loop {
            if let Some(outcome) = outcome(&board) {
                writeln!(self.out, "{}", self.describe(outcome))?;
                info!(%outcome, plies = moves.len(), "Match finished");
                return Ok(MatchReport {
                    outcome,
                    moves,
                    final_board: board,
                });
            }

            let Some(mark) = player(&board) else {
                bail!("Non-terminal board has no player to move");
            };
            let participant: &mut dyn Participant = match mark {
                Player::X => &mut *self.x,
                Player::O => &mut *self.o,
            };

            let mv = participant.choose(&board)?;
            match result(&board, mv) {
                Ok(next) => {
                    info!(%mark, %mv, "Move played");
                    writeln!(self.out, "{} ({mark}) plays {mv}\n{next}\n", participant.name())?;
                    board = next;
                    moves.push(mv);
                }
                Err(err) if participant.may_retry() => {
                    warn!(%mark, %err, "Rejected move");
                    writeln!(self.out, "{err}, try again")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn describe(&self, outcome: Outcome) -> String {
        match outcome.winner() {
            Some(Player::X) => format!("{} (X) wins", self.x.name()),
            Some(Player::O) => format!("{} (O) wins", self.o.name()),
            None => "Draw".to_string(),
        }
    }
}
