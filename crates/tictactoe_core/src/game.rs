//! A human-vs-computer round.
//!
//! The board itself accepts any legal placement. `Match` layers the turn
//! order and the "no moves after the end" rule on top, reporting
//! violations as [`MoveError`].

use super::position::Position;
use super::rules::Outcome;
use super::selector::MoveSelector;
use super::types::{Board, Player};
use derive_more::Display;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Error that can occur when applying a move to a [`Match`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The round is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's the other side's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),

    /// The selector found no empty square.
    #[display("No move available")]
    NoMoveAvailable,
}

impl std::error::Error for MoveError {}

/// One round between a human and the computer.
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    human: Player,
    to_move: Player,
    history: Vec<Position>,
}

impl Match {
    /// Starts a round where the human plays `human`.
    ///
    /// The computer plays the opponent mark. `human_first` decides who
    /// opens.
    #[instrument]
    pub fn new(human: Player, human_first: bool) -> Self {
        let to_move = if human_first { human } else { human.opponent() };
        Self {
            board: Board::new(),
            human,
            to_move,
            history: Vec::new(),
        }
    }

    /// Clears the board and starts another round.
    #[instrument(skip(self))]
    pub fn restart(&mut self, human_first: bool) {
        self.board.reset();
        self.history.clear();
        self.to_move = if human_first {
            self.human
        } else {
            self.human.opponent()
        };
        debug!(to_move = %self.to_move, "Round restarted");
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark the human plays.
    pub fn human(&self) -> Player {
        self.human
    }

    /// The mark the computer plays.
    pub fn computer(&self) -> Player {
        self.human.opponent()
    }

    /// The side whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// True when the computer should move next in an unfinished round.
    pub fn is_computer_turn(&self) -> bool {
        !self.outcome().is_over() && self.to_move == self.computer()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Current outcome of the round.
    pub fn outcome(&self) -> Outcome {
        self.board.evaluate()
    }

    /// Plays the human's move.
    ///
    /// # Errors
    ///
    /// Fails without changing the board if the round is over, it is the
    /// computer's turn, or the square is taken.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn play_human(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        self.place(self.human, pos)
    }

    /// Lets `selector` choose and play the computer's move.
    ///
    /// # Errors
    ///
    /// Fails if the round is over or it is the human's turn.
    #[instrument(skip(self, selector))]
    pub fn play_computer<R: Rng>(
        &mut self,
        selector: &mut MoveSelector<R>,
    ) -> Result<(Position, Outcome), MoveError> {
        let computer = self.computer();
        self.check_turn(computer)?;
        let pos = selector
            .select(&self.board, computer)
            .ok_or(MoveError::NoMoveAvailable)?;
        let outcome = self.place(computer, pos)?;
        Ok((pos, outcome))
    }

    fn check_turn(&self, player: Player) -> Result<(), MoveError> {
        if self.outcome().is_over() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != player {
            return Err(MoveError::NotYourTurn(player));
        }
        Ok(())
    }

    fn place(&mut self, player: Player, pos: Position) -> Result<Outcome, MoveError> {
        self.check_turn(player)?;
        if !self.board.apply_move(pos.to_index(), player) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.history.push(pos);
        self.to_move = player.opponent();

        let outcome = self.board.evaluate();
        if outcome.is_over() {
            info!(%outcome, moves = self.history.len(), "Round finished");
        }
        Ok(outcome)
    }
}
