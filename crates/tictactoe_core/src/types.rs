//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules::{self, Outcome};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, trace};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (opens the round by default).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Mark character used in the text form of a board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is a plain value: copying it is how speculative moves are
/// tried without touching the original (see [`Board::with_move`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; CELL_COUNT]) -> Self {
        Self { squares }
    }

    /// Places `player` on `cell`.
    ///
    /// Returns `false` without touching the board when `cell` is outside
    /// `0..9` or already occupied.
    #[instrument(level = "trace", skip(self))]
    pub fn apply_move(&mut self, cell: usize, player: Player) -> bool {
        match self.squares.get_mut(cell) {
            Some(square) if *square == Square::Empty => {
                *square = Square::Occupied(player);
                true
            }
            _ => {
                trace!(cell, ?player, "Rejected move");
                false
            }
        }
    }

    /// Returns a copy of the board with the move applied, or `None` if the
    /// move is illegal.
    pub fn with_move(&self, cell: usize, player: Player) -> Option<Board> {
        let mut trial = *self;
        trial.apply_move(cell, player).then_some(trial)
    }

    /// Returns the square at `cell`. Out-of-range cells read as empty.
    pub fn occupant(&self, cell: usize) -> Square {
        self.squares.get(cell).copied().unwrap_or_default()
    }

    /// Returns the square at a named position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Number of occupied squares.
    pub fn move_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Iterates over empty positions in index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }

    /// Derives the outcome from the eight winning lines.
    pub fn evaluate(&self) -> Outcome {
        rules::evaluate(self)
    }

    /// Returns the winner and the completed line, if any.
    pub fn winning_line(&self) -> Option<(Player, [Position; 3])> {
        rules::winning_line(self)
    }

    /// Clears every square.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELL_COUNT];
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Three rows separated by `-+-+-`; empty squares show their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player.symbol())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing the text form of a board.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker, nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),

    /// The text did not describe exactly nine squares.
    #[display("Board needs 9 squares, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine squares: `X`/`O` (any case) for marks, `.`, `-`, `_` or a
    /// space for empty. `/`, `|`, newlines and tabs are ignored so rows can be
    /// separated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(CELL_COUNT);
        for c in s.chars() {
            let square = match c {
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' | ' ' => Square::Empty,
                '/' | '|' | '\n' | '\r' | '\t' => continue,
                other => return Err(BoardParseError::UnexpectedChar(other)),
            };
            squares.push(square);
        }

        let found = squares.len();
        let squares: [Square; CELL_COUNT] = squares
            .try_into()
            .map_err(|_| BoardParseError::WrongLength(found))?;
        Ok(Board::from_squares(squares))
    }
}
