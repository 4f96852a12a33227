//! Win/loss/tie counters.

use super::rules::Outcome;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// Result of a finished round from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum RoundResult {
    /// The human completed a line.
    #[strum(to_string = "You win!")]
    HumanWin,
    /// The computer completed a line.
    #[strum(to_string = "Computer wins!")]
    ComputerWin,
    /// Full board, no line.
    #[strum(to_string = "It's a tie!")]
    Tie,
}

/// Running totals across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoreboard {
    /// Rounds won by the human.
    pub human_wins: u32,
    /// Rounds won by the computer.
    pub computer_wins: u32,
    /// Drawn rounds.
    pub ties: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished round. Ongoing outcomes are ignored.
    ///
    /// Counters saturate at `u32::MAX`.
    pub fn record(&mut self, outcome: Outcome, human: Player) -> Option<RoundResult> {
        let result = match outcome {
            Outcome::Ongoing => return None,
            Outcome::Draw => {
                self.ties = self.ties.saturating_add(1);
                RoundResult::Tie
            }
            Outcome::Won(player) if player == human => {
                self.human_wins = self.human_wins.saturating_add(1);
                RoundResult::HumanWin
            }
            Outcome::Won(_) => {
                self.computer_wins = self.computer_wins.saturating_add(1);
                RoundResult::ComputerWin
            }
        };
        Some(result)
    }

    /// Total rounds counted.
    pub fn total(&self) -> u32 {
        self.human_wins
            .saturating_add(self.computer_wins)
            .saturating_add(self.ties)
    }

    /// Zeroes every counter.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Human: {}  Ties: {}  Computer: {}",
            self.human_wins, self.ties, self.computer_wins
        )
    }
}
