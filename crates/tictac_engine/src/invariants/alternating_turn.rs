//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Mark;

/// Invariant: history alternates starting with X, and the current mark
/// agrees with it.
///
/// While the game is active the current mark is X after an even number
/// of moves and O after an odd number. Once the game is over the current
/// mark is the one that made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        let Some(first) = history.first() else {
            return engine.current_player() == Mark::X;
        };

        if first.mark != Mark::X {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        if engine.is_active() {
            let expected = if history.len() % 2 == 0 { Mark::X } else { Mark::O };
            engine.current_player() == expected
        } else {
            history.last().map(|m| m.mark) == Some(engine.current_player())
        }
    }

    fn description() -> &'static str {
        "Marks alternate (X, O, X, O, ...) and the current mark follows history"
    }
}
