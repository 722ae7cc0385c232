//! Status line text shown above the board.

use serde::{Deserialize, Serialize};
use tictac_engine::{GameEngine, Mark, Outcome};

/// The prompt a presentation layer shows in its status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum StatusMessage {
    /// Game in progress.
    #[display("It's {}'s turn", _0)]
    Turn(Mark),
    /// Game won.
    #[display("Player {} has won!", _0)]
    Won(Mark),
    /// Board filled with no winner.
    #[display("Game ended in a draw!")]
    Draw,
    /// Restart pressed before a mode was chosen.
    #[display("Please select a game mode first!")]
    SelectModeFirst,
    /// No session; the mode selector is showing.
    #[display("Choose a game mode to start!")]
    ChooseMode,
}

impl StatusMessage {
    /// The status matching the engine's current state.
    pub fn for_engine(engine: &GameEngine) -> Self {
        if engine.mode().is_none() {
            return StatusMessage::ChooseMode;
        }
        match engine.outcome() {
            Outcome::Win { mark, .. } => StatusMessage::Won(mark),
            Outcome::Draw => StatusMessage::Draw,
            Outcome::InProgress => StatusMessage::Turn(engine.current_player()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_engine::GameMode;

    #[test]
    fn test_texts() {
        assert_eq!(StatusMessage::Turn(Mark::O).to_string(), "It's O's turn");
        assert_eq!(StatusMessage::Won(Mark::X).to_string(), "Player X has won!");
        assert_eq!(StatusMessage::Draw.to_string(), "Game ended in a draw!");
        assert_eq!(
            StatusMessage::SelectModeFirst.to_string(),
            "Please select a game mode first!"
        );
        assert_eq!(
            StatusMessage::ChooseMode.to_string(),
            "Choose a game mode to start!"
        );
    }

    #[test]
    fn test_follows_engine() {
        let mut engine = GameEngine::with_seed(0);
        assert_eq!(StatusMessage::for_engine(&engine), StatusMessage::ChooseMode);

        engine.start_session(GameMode::HumanVsHuman);
        assert_eq!(StatusMessage::for_engine(&engine), StatusMessage::Turn(Mark::X));

        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index).expect("legal");
        }
        assert_eq!(StatusMessage::for_engine(&engine), StatusMessage::Won(Mark::X));
    }
}
