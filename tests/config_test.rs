//! Tests for loading and overriding configuration.

use std::io::Write;
use std::path::PathBuf;
use tictactoe::AppConfig;
use tictactoe_core::{Mode, RandomSource};

#[test]
fn test_from_file_reads_all_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"human\"\nseed = 7\nlog_file = \"game.log\"").unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), Some(Mode::HumanVsHuman));
    assert_eq!(*config.seed(), Some(7));
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
}

#[test]
fn test_load_explicit_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_unknown_key_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"hard\"").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_cli_overrides_file_values() {
    let config = AppConfig::from_toml("mode = \"human\"\nseed = 1").unwrap();
    let config = config.with_overrides(Some(Mode::HumanVsComputer), None, None);

    assert_eq!(*config.mode(), Some(Mode::HumanVsComputer));
    assert_eq!(*config.seed(), Some(1));
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
}

#[test]
fn test_seeded_config_is_reproducible() {
    let config = AppConfig::default().with_overrides(None, Some(42), None);
    let mut a = config.random_source();
    let mut b = config.random_source();

    let first: Vec<_> = (0..16).map(|_| a.pick(4)).collect();
    let second: Vec<_> = (0..16).map(|_| b.pick(4)).collect();
    assert_eq!(first, second);
}
