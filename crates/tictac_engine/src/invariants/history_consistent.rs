//! History consistency invariant: history matches the board.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Square;

/// Invariant: every recorded move is on the board, and nothing else is.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let history = engine.history();

        let occupied = board
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        occupied == history.len()
            && history
                .iter()
                .all(|m| board.get(m.position) == Square::Occupied(m.mark))
    }

    fn description() -> &'static str {
        "History length matches occupied squares and every move is on the board"
    }
}
