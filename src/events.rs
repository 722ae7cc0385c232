//! Messages crossing the presentation boundary.

use crate::status::StatusMessage;
use serde::{Deserialize, Serialize};
use tictac_engine::{GameMode, GameSnapshot, Mark, Outcome, Position};

/// Input from the presentation layer or mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A cell was clicked or typed.
    CellSelected(usize),
    /// A mode was picked; starts a fresh game.
    ModeChosen(GameMode),
    /// Restart under the current mode.
    RestartRequested,
    /// Leave the session and show the mode selector again.
    ExitRequested,
}

/// Notifications sent to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Full state to render.
    StateChanged(GameSnapshot),
    /// New status line text.
    Status(StatusMessage),
    /// A mark was placed.
    MoveMade {
        /// Who moved.
        mark: Mark,
        /// Where.
        position: Position,
    },
    /// The random opponent will move after its pause; input is disabled.
    OpponentThinking,
    /// The game ended; a win carries the line to highlight.
    GameOver(Outcome),
}
