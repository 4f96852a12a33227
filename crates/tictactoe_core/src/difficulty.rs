//! Difficulty tiers and the policy table behind them.

use serde::{Deserialize, Serialize};

/// One step of a move-selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Tactic {
    /// Complete one of our own lines.
    Win,
    /// Occupy the square that would complete an opponent line.
    Block,
    /// Take the center.
    Center,
    /// Take the first free corner.
    Corner,
    /// Take the first free edge.
    Edge,
    /// Any empty square, uniformly.
    Random,
}

/// How hard the computer tries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Plays any empty square.
    Easy,
    /// Blocks immediate threats, otherwise random.
    Harder,
    /// Wins, blocks, then prefers center, corners and edges.
    #[default]
    Expert,
}

impl Difficulty {
    /// Tactics tried in order until one yields a square.
    ///
    /// `Harder` never looks for its own win; only `Expert` does.
    pub fn policy(self) -> &'static [Tactic] {
        match self {
            Difficulty::Easy => &[Tactic::Random],
            Difficulty::Harder => &[Tactic::Block, Tactic::Random],
            Difficulty::Expert => &[
                Tactic::Win,
                Tactic::Block,
                Tactic::Center,
                Tactic::Corner,
                Tactic::Edge,
                Tactic::Random,
            ],
        }
    }
}
