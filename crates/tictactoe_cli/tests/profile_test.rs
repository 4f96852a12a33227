//! Tests for profile persistence.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use tictactoe_cli::{DEFAULT_PROFILE_PATH, Profile, resolve_profile_path};
use tictactoe_core::{Difficulty, Outcome, Player, RoundResult};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let profile = Profile::load(dir.path().join("absent.toml")).expect("Load failed");
    assert_eq!(profile, Profile::default());
    assert_eq!(*profile.difficulty(), Difficulty::Expert);
    assert!(*profile.human_first());
    assert_eq!(profile.scoreboard().total(), 0);
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("profile.toml");

    let mut profile = Profile::default();
    profile.set_difficulty(Difficulty::Harder);
    profile.record(Outcome::Won(Player::O), Player::X);
    profile.record(Outcome::Draw, Player::X);
    profile.save(&path).expect("Save failed");

    let loaded = Profile::load(&path).expect("Load failed");
    assert_eq!(loaded, profile);
    assert_eq!(loaded.scoreboard().computer_wins, 1);
    assert_eq!(loaded.scoreboard().ties, 1);
}

#[test]
fn test_file_layout_is_readable_toml() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("profile.toml");
    Profile::default().save(&path).expect("Save failed");

    let content = fs::read_to_string(&path).expect("Read failed");
    assert!(content.contains("difficulty = \"expert\""), "{content}");
    assert!(content.contains("human_first = true"), "{content}");
    assert!(content.contains("[scoreboard]"), "{content}");
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("profile.toml");
    fs::write(&path, "difficulty = \"easy\"\n\n[scoreboard]\nties = 3\n").expect("Write failed");

    let profile = Profile::load(&path).expect("Load failed");
    assert_eq!(*profile.difficulty(), Difficulty::Easy);
    assert!(*profile.human_first());
    assert_eq!(profile.scoreboard().ties, 3);
    assert_eq!(profile.scoreboard().human_wins, 0);
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("profile.toml");
    fs::write(&path, "difficulty = \"impossible\"").expect("Write failed");

    let err = Profile::load(&path).expect_err("Should reject unknown difficulty");
    assert!(err.message.contains("Failed to parse profile"), "{}", err.message);
}

#[test]
fn test_record_alternates_opener_only_for_finished_rounds() {
    let mut profile = Profile::default();
    assert_eq!(profile.record(Outcome::Ongoing, Player::X), None);
    assert!(*profile.human_first());

    assert_eq!(
        profile.record(Outcome::Won(Player::X), Player::X),
        Some(RoundResult::HumanWin)
    );
    assert!(!*profile.human_first());

    profile.record(Outcome::Draw, Player::X);
    assert!(*profile.human_first());
}

#[test]
fn test_clear_scores_keeps_settings() {
    let mut profile = Profile::default();
    profile.set_difficulty(Difficulty::Easy);
    profile.record(Outcome::Won(Player::X), Player::X);
    profile.clear_scores();

    assert_eq!(profile.scoreboard().total(), 0);
    assert_eq!(*profile.difficulty(), Difficulty::Easy);
    assert!(!*profile.human_first());
}

#[test]
fn test_explicit_profile_path_wins() {
    let explicit = PathBuf::from("/tmp/somewhere/profile.toml");
    assert_eq!(resolve_profile_path(Some(explicit.clone())), explicit);
    // Without an explicit path the result is either the env override or the default.
    let resolved = resolve_profile_path(None);
    assert!(
        std::env::var_os(tictactoe_cli::PROFILE_ENV).is_some()
            || resolved == PathBuf::from(DEFAULT_PROFILE_PATH)
    );
}

#[test]
fn test_huge_counters_load_and_record() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("profile.toml");
    fs::write(
        &path,
        "[scoreboard]\nhuman_wins = 4294967295\nties = 4294967295\n",
    )
    .expect("Failed to write fixture");

    let mut profile = Profile::load(&path).expect("Load failed");
    assert_eq!(profile.scoreboard().total(), u32::MAX);
    assert_eq!(profile.record(Outcome::Draw, Player::X), Some(RoundResult::Tie));
    assert_eq!(profile.scoreboard().ties, u32::MAX);
}
