//! Tests for loading match configuration from disk.

use minimax_play::MatchConfig;
use minimax_tictactoe::Player;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
human = "O"
hints = true
human_name = "Grace"
"#
    )
    .unwrap();

    let config = MatchConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.human(), Player::O);
    assert!(*config.hints());
    assert_eq!(config.human_name(), "Grace");
    assert_eq!(config.engine_name(), "Minimax");
}

#[test]
fn test_missing_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_flags_override_file() {
    let config = MatchConfig::from_toml("human = \"O\"")
        .unwrap()
        .with_human(Player::X)
        .with_hints(true);
    assert_eq!(*config.human(), Player::X);
    assert!(*config.hints());
}
