//! Terminal front end for optimal tic-tac-toe.
//!
//! # Architecture
//!
//! - **Config**: TOML match settings with command-line overrides
//! - **Participants**: human (line input) and engine (minimax) move choosers
//! - **Orchestrator**: the match loop between two participants
//! - **Solve**: full analysis of a single position

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
mod participants;
mod solve;

pub use cli::{Cli, Command, Side, hints_override};
pub use config::{ConfigError, MatchConfig};
pub use orchestrator::{Match, MatchReport};
pub use participants::{EngineParticipant, HumanParticipant, Participant, parse_move};
pub use solve::{Analysis, MoveScore, analyze};
