//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Who sits across the board from the human.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum GameMode {
    /// Two humans alternating on one device.
    HumanVsHuman,
    /// One human against the uniformly random opponent.
    HumanVsRandom,
}

impl GameMode {
    /// Every selectable mode, in menu order.
    pub const ALL: [GameMode; 2] = [GameMode::HumanVsHuman, GameMode::HumanVsRandom];

    /// Returns display name.
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Player vs Player",
            GameMode::HumanVsRandom => "Player vs Computer",
        }
    }

    /// Whether this mode includes the automated opponent.
    pub fn has_opponent(&self) -> bool {
        matches!(self, GameMode::HumanVsRandom)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
