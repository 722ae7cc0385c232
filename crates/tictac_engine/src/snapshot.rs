//! Read-only view of an engine for rendering.

use crate::engine::GameEngine;
use crate::mode::GameMode;
use crate::rules::Outcome;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cell contents in index order.
    pub cells: [Option<Mark>; 9],
    /// Mark to move (the winner once the game is won).
    pub current_player: Mark,
    /// Whether input should be enabled.
    pub active: bool,
    /// Selected mode; `None` means show the mode selector.
    pub mode: Option<GameMode>,
    /// Last evaluated outcome, including the line to highlight.
    pub outcome: Outcome,
    /// True while the random opponent is about to move.
    pub awaiting_opponent: bool,
}

impl GameSnapshot {
    /// Captures the engine's current state.
    pub fn from_engine(engine: &GameEngine) -> Self {
        Self {
            cells: engine.board().squares().map(|sq| sq.mark()),
            current_player: engine.current_player(),
            active: engine.is_active(),
            mode: engine.mode(),
            outcome: engine.outcome(),
            awaiting_opponent: engine.awaiting_opponent(),
        }
    }

    /// Indices to highlight after a win.
    pub fn highlighted(&self) -> Option<[usize; 3]> {
        self.outcome.winning_line().map(|line| line.indices())
    }

    /// Serializes to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
