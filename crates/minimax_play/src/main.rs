//! Minimax Play - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use minimax_play::{
    Cli, Command, EngineParticipant, HumanParticipant, Match, MatchConfig, analyze,
    hints_override,
};
use minimax_tictactoe::{Board, Player};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed command line");

    match cli.command {
        Command::Play {
            human,
            config,
            hints,
            no_hints,
        } => run_play(
            human.map(Player::from),
            config,
            hints_override(hints, no_hints),
        ),
        Command::Selfplay => run_selfplay(),
        Command::Solve { board, json } => run_solve(&board, json),
    }
}

/// Human against the engine on stdin/stdout.
#[instrument]
fn run_play(human: Option<Player>, config: Option<PathBuf>, hints: Option<bool>) -> Result<()> {
    let mut settings = match config {
        Some(path) => MatchConfig::from_file(&path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => MatchConfig::default(),
    };
    if let Some(mark) = human {
        settings = settings.with_human(mark);
    }
    if let Some(hints) = hints {
        settings = settings.with_hints(hints);
    }
    info!(?settings, "Starting human match");

    let stdin = io::stdin();
    let mut person = HumanParticipant::new(
        settings.human_name().clone(),
        stdin.lock(),
        io::stdout(),
        *settings.hints(),
    );
    let mut engine = EngineParticipant::new(settings.engine_name().clone());

    let report = match settings.human() {
        Player::X => Match::new(&mut person, &mut engine, io::stdout()).run()?,
        Player::O => Match::new(&mut engine, &mut person, io::stdout()).run()?,
    };
    debug!(?report, "Match report");
    Ok(())
}

/// Engine against itself.
#[instrument]
fn run_selfplay() -> Result<()> {
    let mut x = EngineParticipant::new("Minimax X");
    let mut o = EngineParticipant::new("Minimax O");

    let report = Match::new(&mut x, &mut o, io::stdout()).run()?;
    info!(outcome = %report.outcome, "Self-play finished");
    Ok(())
}

/// Prints a full analysis of one position.
#[instrument]
fn run_solve(board: &str, json: bool) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Parsing board {board:?}"))?;
    let analysis = analyze(&board);

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &analysis)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{analysis}")?;
    }

    Ok(())
}
