//! One-shot move suggestions for a board given on the command line.

use rand::Rng;
use tictactoe_core::{Board, Difficulty, Outcome, Player, Position, select_move};
use tracing::{debug, instrument};

/// What the computer would do with a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    /// The board already holds a win or a draw.
    Finished(Outcome),
    /// The selector's move and the board after it.
    Move {
        /// Side the move is for.
        player: Player,
        /// Difficulty the move was chosen at.
        difficulty: Difficulty,
        /// Chosen square.
        position: Position,
        /// Board with the move applied.
        after: Board,
    },
    /// Nothing left to play.
    NoMove,
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suggestion::Finished(outcome) => write!(f, "Game is over: {}", outcome),
            Suggestion::Move {
                player,
                difficulty,
                position,
                after,
            } => write!(
                f,
                "{} ({}) plays {} ({})\n{}",
                player,
                difficulty,
                position,
                position.number(),
                after
            ),
            Suggestion::NoMove => write!(f, "No move"),
        }
    }
}

/// Side to move when the board alone has to tell: X opens, so equal counts
/// mean X.
pub fn side_to_move(board: &Board) -> Player {
    let count = |player| {
        board
            .squares()
            .iter()
            .filter(|s| s.player() == Some(player))
            .count()
    };
    if count(Player::X) > count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Picks a move for `player`, or for the inferred side to move when `None`.
#[instrument(skip(rng))]
pub fn suggest<R: Rng>(
    board: &Board,
    player: Option<Player>,
    difficulty: Difficulty,
    rng: &mut R,
) -> Suggestion {
    let outcome = board.evaluate();
    if outcome.is_over() {
        return Suggestion::Finished(outcome);
    }

    let player = player.unwrap_or_else(|| side_to_move(board));
    let chosen = select_move(board, player, difficulty, rng)
        .and_then(|position| Some((position, board.with_move(position.to_index(), player)?)));
    match chosen {
        Some((position, after)) => {
            debug!(%player, %position, "Suggested move");
            Suggestion::Move {
                player,
                difficulty,
                position,
                after,
            }
        }
        None => Suggestion::NoMove,
    }
}
