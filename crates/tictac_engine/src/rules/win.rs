//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A line of three positions that wins the game when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinCondition([Position; 3]);

impl WinCondition {
    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns the mark filling all three squares, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.mark()
        } else {
            None
        }
    }
}

/// The eight winning lines. Declaration order is the tie-break.
pub const WIN_CONDITIONS: [WinCondition; 8] = [
    // Rows
    WinCondition([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinCondition([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinCondition([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinCondition([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinCondition([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinCondition([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinCondition([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinCondition([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks if there is a winner on the board.
///
/// Returns the winning mark together with the first satisfied line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, WinCondition)> {
    WIN_CONDITIONS
        .iter()
        .find_map(|line| line.owner(board).map(|mark| (mark, *line)))
}
