//! Position analysis for the `solve` command.

use minimax_tictactoe::{
    Board, Move, Outcome, Player, minimax, outcome, player, principal_variation, score_moves,
    value, winning_line,
};
use serde::{Serialize, Serializer};
use tracing::{instrument, warn};

/// A legal move and the value it leads to under optimal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveScore {
    /// The move.
    #[serde(rename = "move")]
    pub mv: Move,
    /// Utility reached with best play after it, from X's perspective.
    pub score: i8,
}

/// Everything the solver knows about one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The analysed board.
    #[serde(serialize_with = "board_rows")]
    pub board: Board,
    /// Side to move, `None` on a full board.
    pub to_move: Option<Player>,
    /// Set when the game is already over.
    pub outcome: Option<Outcome>,
    /// Cells of the completed line when someone has won.
    pub winning_line: Option<[Move; 3]>,
    /// Game-theoretic value from X's perspective.
    pub value: i8,
    /// Optimal move, `None` when the game is over.
    pub best_move: Option<Move>,
    /// Every legal move with its value.
    pub scores: Vec<MoveScore>,
    /// Optimal continuation to the end of the game.
    pub principal_variation: Vec<Move>,
}

/// Serializes a board as its three text rows.
fn board_rows<S: Serializer>(board: &Board, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(board.to_string().lines())
}

/// Solves `board` completely.
///
/// Boards whose mark counts cannot arise from alternating play are still
/// analysed, with a warning.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board) -> Analysis {
    if !board.is_reachable_counts() {
        warn!("Mark counts are not reachable by alternating play from X");
    }

    Analysis {
        board: *board,
        to_move: player(board),
        outcome: outcome(board),
        winning_line: winning_line(board),
        value: value(board),
        best_move: minimax(board),
        scores: score_moves(board)
            .into_iter()
            .map(|(mv, score)| MoveScore { mv, score })
            .collect(),
        principal_variation: principal_variation(board),
    }
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}\n", self.board)?;

        if let Some(outcome) = self.outcome {
            write!(f, "Game over: {outcome}")?;
            if let Some(line) = self.winning_line {
                let cells: Vec<String> = line.iter().map(Move::to_string).collect();
                write!(f, " along {}", cells.join(" "))?;
            }
            return Ok(());
        }

        if let Some(mark) = self.to_move {
            writeln!(f, "To move: {mark}")?;
        }
        writeln!(f, "Value: {} ({})", self.value, Outcome::from_utility(self.value))?;
        if let Some(mv) = self.best_move {
            writeln!(f, "Best move: {mv}")?;
        }

        let scores: Vec<String> = self
            .scores
            .iter()
            .map(|s| format!("{}={:+}", s.mv, s.score))
            .collect();
        writeln!(f, "Scores: {}", scores.join(" "))?;

        let line: Vec<String> = self.principal_variation.iter().map(Move::to_string).collect();
        write!(f, "Line: {}", line.join(" "))
    }
}
