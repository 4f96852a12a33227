//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{Board, Difficulty, Player};

/// Tic-tac-toe against a computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Computer difficulty (easy, harder, expert); defaults to the profile's
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Profile file (falls back to $TICTACTOE_PROFILE, then tictactoe_profile.toml)
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before each computer move, in milliseconds
        #[arg(long, default_value = "500")]
        think_ms: u64,
    },

    /// Print the computer's move for a board
    Suggest {
        /// Board as 9 squares, e.g. "XX./O../..." (X, O, and . for empty)
        #[arg(short, long)]
        board: Board,

        /// Side to move; inferred from the mark counts when omitted
        #[arg(long)]
        player: Option<Player>,

        /// Difficulty to select with
        #[arg(short, long, default_value = "expert")]
        difficulty: Difficulty,

        /// Seed for random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the saved scoreboard and settings
    Stats {
        /// Profile file
        #[arg(short, long)]
        profile: Option<PathBuf>,
    },

    /// Zero the saved scoreboard, keeping settings
    ResetStats {
        /// Profile file
        #[arg(short, long)]
        profile: Option<PathBuf>,
    },
}
