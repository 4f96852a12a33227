//! Tic-tac-toe rules and computer opponent.
//!
//! # Architecture
//!
//! - **Board**: nine squares in row-major order, mutated only by legal moves
//! - **Rules**: line-based win detection and draw detection ([`Board::evaluate`])
//! - **Selector**: difficulty-driven move choice for the computer side
//! - **Match**: a human-vs-computer round with turn enforcement
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictactoe_core::{Board, Difficulty, Outcome, Player, Position, select_move};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let pos = select_move(&board, Player::O, Difficulty::Expert, &mut rng);
//! assert_eq!(pos, Some(Position::MiddleRight));
//! assert_eq!(board.evaluate(), Outcome::Ongoing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod difficulty;
mod game;
mod position;
pub mod rules;
mod score;
mod selector;
mod types;

pub use difficulty::{Difficulty, Tactic};
pub use game::{Match, MoveError};
pub use position::{Position, PositionParseError};
pub use rules::Outcome;
pub use score::{RoundResult, Scoreboard};
pub use selector::{MoveSelector, random_move, select_move, winning_move};
pub use types::{Board, BoardParseError, CELL_COUNT, Player, Square};
