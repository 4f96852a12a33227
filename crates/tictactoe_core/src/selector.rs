//! Computer move selection.
//!
//! Every difficulty runs the same machinery: walk the tactics of
//! [`Difficulty::policy`] and take the first square one of them produces.
//! Threat detection plays the candidate on a copy of the board, so the
//! caller's board is never touched.

use super::difficulty::{Difficulty, Tactic};
use super::position::Position;
use super::rules::Outcome;
use super::types::{Board, Player};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks moves for one side at a fixed difficulty.
#[derive(Debug, Clone)]
pub struct MoveSelector<R> {
    difficulty: Difficulty,
    rng: R,
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector drawing randomness from `rng`.
    pub fn new(difficulty: Difficulty, rng: R) -> Self {
        Self { difficulty, rng }
    }

    /// Returns the current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes the difficulty for subsequent moves.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Chooses a square for `player`, or `None` when the board is full.
    pub fn select(&mut self, board: &Board, player: Player) -> Option<Position> {
        select_move(board, player, self.difficulty, &mut self.rng)
    }
}

/// Chooses a square for `player` on `board` under `difficulty`.
///
/// Returns `None` only when no empty square is left.
#[instrument(skip(board, rng), fields(moves = board.move_count()))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    for &tactic in difficulty.policy() {
        if let Some(pos) = apply_tactic(tactic, board, player, rng) {
            debug!(%tactic, position = %pos, "Selected move");
            return Some(pos);
        }
    }
    debug!("No empty square left");
    None
}

fn apply_tactic<R: Rng + ?Sized>(
    tactic: Tactic,
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Option<Position> {
    match tactic {
        Tactic::Win => winning_move(board, player),
        Tactic::Block => winning_move(board, player.opponent()),
        Tactic::Center => first_empty(board, &[Position::Center]),
        Tactic::Corner => first_empty(board, &Position::CORNERS),
        Tactic::Edge => first_empty(board, &Position::EDGES),
        Tactic::Random => random_move(board, rng),
    }
}

/// First empty square, in index order, on which `player` would complete a
/// line.
///
/// Used with the opponent's mark this finds the square to block.
pub fn winning_move(board: &Board, player: Player) -> Option<Position> {
    board.empty_cells().find(|pos| {
        board
            .with_move(pos.to_index(), player)
            .is_some_and(|trial| trial.evaluate() == Outcome::Won(player))
    })
}

fn first_empty(board: &Board, candidates: &[Position]) -> Option<Position> {
    candidates.iter().copied().find(|pos| board.is_empty(*pos))
}

/// Uniformly random empty square.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let empty: Vec<Position> = board.empty_cells().collect();
    empty.choose(rng).copied()
}
