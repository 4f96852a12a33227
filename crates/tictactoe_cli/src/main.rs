//! tictactoe - terminal game against the computer.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Duration;
use tictactoe_core::{Board, Difficulty, Player};
use tictactoe_cli::{Console, Profile, resolve_profile_path, suggest};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Play {
            difficulty,
            profile,
            seed,
            think_ms,
        } => run_play(difficulty, profile, seed, think_ms),
        Command::Suggest {
            board,
            player,
            difficulty,
            seed,
        } => run_suggest(board, player, difficulty, seed),
        Command::Stats { profile } => run_stats(profile),
        Command::ResetStats { profile } => run_reset_stats(profile),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run the interactive game
#[instrument]
fn run_play(
    difficulty: Option<Difficulty>,
    profile_path: Option<PathBuf>,
    seed: Option<u64>,
    think_ms: u64,
) -> Result<()> {
    let path = resolve_profile_path(profile_path);
    let mut profile = Profile::load(&path)?;
    if let Some(difficulty) = difficulty {
        profile.set_difficulty(difficulty);
    }
    info!(path = %path.display(), difficulty = %profile.difficulty(), "Starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), BufWriter::new(stdout.lock()), profile, make_rng(seed))
        .with_profile_path(path)
        .with_think_time(Duration::from_millis(think_ms));
    console.run()
}

/// Print a single suggested move
#[instrument]
fn run_suggest(
    board: Board,
    player: Option<Player>,
    difficulty: Difficulty,
    seed: Option<u64>,
) -> Result<()> {
    println!("{}", suggest(&board, player, difficulty, &mut make_rng(seed)));
    Ok(())
}

/// Print the saved profile
#[instrument]
fn run_stats(profile_path: Option<PathBuf>) -> Result<()> {
    let path = resolve_profile_path(profile_path);
    let profile = Profile::load(&path)?;
    let opener = if *profile.human_first() { "you" } else { "computer" };

    println!("Profile:     {}", path.display());
    println!("Difficulty:  {}", profile.difficulty());
    println!("Next opener: {}", opener);
    println!("Rounds:      {}", profile.scoreboard().total());
    println!("{}", profile.scoreboard());
    Ok(())
}

/// Zero the saved counters
#[instrument]
fn run_reset_stats(profile_path: Option<PathBuf>) -> Result<()> {
    let path = resolve_profile_path(profile_path);
    let mut profile = Profile::load(&path)?;
    profile.clear_scores();
    profile.save(&path)?;
    println!("Scoreboard cleared ({})", path.display());
    Ok(())
}
