//! Tests for config loading and command-line overrides.

use std::io::Write;
use tactic::cli::ConfigArgs;
use tactic::{GameConfig, GameMode};
use tactic_core::{Player, SearchMode};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
        mode = "pvp"
        log_file = "game.log"

        [ai]
        search_mode = "random"
        player = "one"
        "#,
    );

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), GameMode::PlayerVsPlayer);
    assert_eq!(config.log_file().to_str(), Some("game.log"));
    assert_eq!(*config.ai().search_mode(), SearchMode::Random);
    assert_eq!(*config.ai().player(), Player::One);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_from_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let file = write_config("mode = [");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("mode = \"pvp\"\n[ai]\nsearch_mode = \"random\"\n");
    let args = ConfigArgs {
        config: file.path().to_path_buf(),
        mode: Some(GameMode::PlayerVsAi),
        difficulty: None,
        ai_player: None,
        first_player: Some(Player::Two),
        seed: Some(42),
    };

    let config = args.resolve().unwrap();
    assert_eq!(*config.mode(), GameMode::PlayerVsAi);
    // Not overridden, so the file value stays.
    assert_eq!(*config.ai().search_mode(), SearchMode::Random);
    assert_eq!(*config.first_player(), Player::Two);
    assert_eq!(*config.ai().seed(), Some(42));
}
