//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The engine applies the state
//! transitions these rules decide on.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, WinCondition, WIN_CONDITIONS};

use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner and at least one empty square.
    #[default]
    InProgress,
    /// A line is uniformly held by `mark`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The first satisfied line in declaration order.
        line: WinCondition,
    },
    /// Full board, no winning line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinCondition> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { mark, line } => write!(f, "Player {} wins on {:?}", mark, line.indices()),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board: win first, then draw, else in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_winner(board) {
        Outcome::Win { mark, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
