//! Moves and move rejection reasons.
//!
//! Moves are domain events: the engine records every accepted move in
//! its history, and every rejected one is described by a [`MoveError`].

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was rejected. The engine state is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// No game is accepting moves (no mode, or the game is over).
    #[display("Game is not active")]
    GameInactive,

    /// The index does not name a square.
    #[display("Index {} is outside the board (0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The random opponent was asked to move out of turn.
    #[display("It is not the opponent's turn")]
    NotOpponentTurn,

    /// A human tried to move while the opponent owns the turn.
    #[display("It is not the human player's turn")]
    NotHumanTurn,

    /// The opponent found no empty square to play.
    #[display("No empty squares remain")]
    NoEmptySquares,
}
