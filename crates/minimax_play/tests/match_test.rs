//! End-to-end matches between scripted humans and the engine.

use minimax_play::{EngineParticipant, HumanParticipant, Match, analyze};
use minimax_tictactoe::{Board, Move, Outcome};
use std::io::Cursor;

#[test]
fn test_human_x_loses_to_engine() {
    // X opens in a corner, blocks once, then ignores O's diagonal threat.
    let input = Cursor::new("1\n8\n6\n2\n");
    let mut human = HumanParticipant::new("Ada", input, Vec::new(), true);
    let mut engine = EngineParticipant::new("Minimax");

    let mut transcript = Vec::new();
    let report = Match::new(&mut human, &mut engine, &mut transcript)
        .run()
        .unwrap();

    assert_eq!(report.outcome, Outcome::OWins);
    assert_eq!(report.moves[0], Move::new(0, 0));
    assert!(String::from_utf8(transcript).unwrap().contains("Minimax (O) wins"));

    let prompts = String::from_utf8(human.into_output()).unwrap();
    assert!(prompts.contains("Hints:"));
}

#[test]
fn test_self_play_report_is_consistent() {
    let mut x = EngineParticipant::new("X");
    let mut o = EngineParticipant::new("O");
    let report = Match::new(&mut x, &mut o, Vec::new()).run().unwrap();

    assert_eq!(report.outcome, Outcome::Draw);
    let expected = analyze(&Board::new()).principal_variation;
    assert_eq!(report.moves, expected);
}
