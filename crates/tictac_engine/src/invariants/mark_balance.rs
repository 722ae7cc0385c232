//! Mark balance invariant: X leads O by at most one mark.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Mark;

/// Invariant: the X count equals the O count or exceeds it by one.
pub struct MarkBalanceInvariant;

impl Invariant<GameEngine> for MarkBalanceInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x = engine.board().count(Mark::X);
        let o = engine.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by exactly one"
    }
}
