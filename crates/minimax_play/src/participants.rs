//! Participants that choose moves in a match.

use anyhow::{Result, bail};
use minimax_tictactoe::{Board, Move, minimax, score_moves};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Anything that can pick a move for the side to move.
pub trait Participant {
    /// Chooses a move on a non-terminal board.
    fn choose(&mut self, board: &Board) -> Result<Move>;

    /// Returns the participant's display name.
    fn name(&self) -> &str;

    /// Whether the match should ask again after this participant picks an
    /// illegal square instead of aborting.
    fn may_retry(&self) -> bool {
        false
    }
}

/// Plays the minimax move every turn.
#[derive(Debug, Clone)]
pub struct EngineParticipant {
    name: String,
}

impl EngineParticipant {
    /// Creates a new engine participant.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Participant for EngineParticipant {
    #[instrument(skip(self, board), fields(name = %self.name))]
    fn choose(&mut self, board: &Board) -> Result<Move> {
        match minimax(board) {
            Some(mv) => Ok(mv),
            None => bail!("Engine asked to move on a finished board"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Reads moves as text lines from `input`, writing prompts to `output`.
///
/// Accepts `row col` or `row,col` with zero-based coordinates, or a single
/// digit 1-9 numbering the cells in reading order.
pub struct HumanParticipant<R, W> {
    name: String,
    input: R,
    output: W,
    hints: bool,
}

impl<R: BufRead, W: Write> HumanParticipant<R, W> {
    /// Creates a new human participant.
    pub fn new(name: impl Into<String>, input: R, output: W, hints: bool) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            hints,
        }
    }

    /// Consumes the participant, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_hints(&mut self, board: &Board) -> Result<()> {
        let hints: Vec<String> = score_moves(board)
            .into_iter()
            .map(|(mv, score)| format!("{mv}={score:+}"))
            .collect();
        writeln!(self.output, "Hints: {}", hints.join(" "))?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Participant for HumanParticipant<R, W> {
    #[instrument(skip(self, board), fields(name = %self.name))]
    fn choose(&mut self, board: &Board) -> Result<Move> {
        if self.hints {
            self.write_hints(board)?;
        }

        loop {
            write!(self.output, "{}, enter row and column: ", self.name)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before {} chose a move", self.name);
            }

            match parse_move(&line) {
                Some(mv) => return Ok(mv),
                None => {
                    debug!(input = %line.trim(), "Unreadable move");
                    writeln!(self.output, "Could not read {:?} as a move", line.trim())?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn may_retry(&self) -> bool {
        true
    }
}

/// Parses `row col`, `row,col` or a cell number 1-9.
///
/// Coordinates are not range-checked; the rules reject off-board moves.
pub fn parse_move(input: &str) -> Option<Move> {
    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [cell] => {
            let number: usize = cell.parse().ok()?;
            number.checked_sub(1).and_then(Move::from_index)
        }
        [row, col] => Some(Move::new(row.parse().ok()?, col.parse().ok()?)),
        _ => None,
    }
}
