//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so the move selector can run them on trial copies.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a board, derived from its squares and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    Ongoing,
    /// Board is full with no winner.
    Draw,
    /// A player completed a line.
    Won(Player),
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Returns true once the round has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Won(player) => write!(f, "Player {} wins", player),
        }
    }
}

/// Evaluates the board: a completed line wins, otherwise a full board is a
/// draw, otherwise the round goes on.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_reset_board_is_ongoing() {
        let mut board: Board = "XOX/OXO/XOX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Won(Player::X));
        board.reset();
        assert_eq!(evaluate(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX/XOX/OXO".parse().unwrap();
        assert_eq!(check_winner(&board), None);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_win_on_last_square_beats_draw() {
        // Full board where X's final move completes the diagonal.
        let board: Board = "XOO/OXX/OXX".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Outcome::Won(Player::X));
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!Outcome::Ongoing.is_over());
        assert!(Outcome::Draw.is_over());
        assert_eq!(Outcome::Won(Player::O).winner(), Some(Player::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::Won(Player::X).to_string(), "Player X wins");
    }
}
