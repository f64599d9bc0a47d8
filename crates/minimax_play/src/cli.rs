//! Command-line interface for minimax_play.

use clap::{Parser, Subcommand, ValueEnum};
use minimax_tictactoe::Player;

/// Minimax Play - optimal tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "minimax_play")]
#[command(about = "Play or analyse tic-tac-toe against an exhaustive minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine
    Play {
        /// Mark the human plays (X moves first)
        #[arg(long, value_enum)]
        human: Option<Side>,

        /// Path to a TOML match config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Show minimax scores before each of your moves
        #[arg(long, overrides_with = "no_hints")]
        hints: bool,

        /// Hide minimax scores even if the config enables them
        #[arg(long, overrides_with = "hints")]
        no_hints: bool,
    },

    /// Let the engine play both sides
    Selfplay,

    /// Solve a position, e.g. "XX./OO./..."
    Solve {
        /// Nine cells: X, O, and . for empty; / and | are ignored
        board: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Resolves `--hints`/`--no-hints` into an override for the config value.
///
/// `None` when neither flag was given.
pub fn hints_override(hints: bool, no_hints: bool) -> Option<bool> {
    match (hints, no_hints) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// A mark selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Play X and move first
    X,
    /// Play O and move second
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}
