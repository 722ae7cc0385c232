//! The session engine: board, turn, mode and outcome in one value.

use crate::action::{Move, MoveError};
use crate::invariants;
use crate::mode::GameMode;
use crate::opponent::pick_random_square;
use crate::position::Position;
use crate::rng::SessionRng;
use crate::rules::{self, Outcome};
use crate::snapshot::GameSnapshot;
use crate::types::{Board, Mark, Square};
use tracing::{debug, info, instrument, warn};

/// Session-level failures that are reported to the user rather than
/// silently absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// A restart was requested before any mode was chosen.
    #[display("No game mode selected")]
    NoModeSelected,
}

/// Tic-tac-toe session engine.
///
/// Created inert: no mode, not active. [`GameEngine::start_session`]
/// makes it playable; [`GameEngine::exit_session`] returns it to the
/// inert state. Rejected operations never mutate state.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current: Mark,
    active: bool,
    mode: Option<GameMode>,
    outcome: Outcome,
    history: Vec<Move>,
    opponent: Mark,
    rng: SessionRng,
}

impl GameEngine {
    /// Creates an inert engine whose opponent draws from entropy.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(SessionRng::from_random())
    }

    /// Creates an inert engine with a deterministic opponent.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SessionRng::new(seed))
    }

    fn with_rng(rng: SessionRng) -> Self {
        Self {
            board: Board::new(),
            current: Mark::X,
            active: false,
            mode: None,
            outcome: Outcome::InProgress,
            history: Vec::new(),
            opponent: Mark::O,
            rng,
        }
    }

    /// Sets the mark the random opponent plays. Defaults to O.
    pub fn with_opponent(mut self, mark: Mark) -> Self {
        self.opponent = mark;
        self
    }

    /// Selects a mode and starts a fresh game with X to move.
    #[instrument(skip(self))]
    pub fn start_session(&mut self, mode: GameMode) {
        info!(%mode, seed = self.rng.seed(), "Starting session");
        self.mode = Some(mode);
        self.clear();
        self.active = true;
    }

    /// Clears the board and restarts under the current mode.
    ///
    /// Fails without touching state when no mode is selected.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.mode.is_none() {
            debug!("Restart requested before a mode was chosen");
            return Err(SessionError::NoModeSelected);
        }
        debug!("Resetting game");
        self.clear();
        self.active = true;
        Ok(())
    }

    /// Leaves the session: clears board and mode, stops accepting moves.
    #[instrument(skip(self))]
    pub fn exit_session(&mut self) {
        info!("Exiting session");
        self.mode = None;
        self.clear();
        self.active = false;
    }

    fn clear(&mut self) {
        self.board = Board::new();
        self.current = Mark::X;
        self.outcome = Outcome::InProgress;
        self.history.clear();
    }

    /// Places the current mark at `index` and evaluates the result.
    ///
    /// Rejected moves leave the engine untouched.
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if !self.active {
            return Err(MoveError::GameInactive);
        }

        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;

        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let mark = self.current;
        self.board.set(position, Square::Occupied(mark));
        self.history.push(Move::new(mark, position));
        debug!(%position, "Move applied");

        let outcome = self.settle();

        debug_assert!(
            invariants::check_engine(self).is_ok(),
            "engine invariants violated after {mark} -> {position}: {:?}",
            invariants::check_engine(self)
        );

        Ok(outcome)
    }

    /// Applies a move on behalf of a human player.
    ///
    /// Rejects the move while the random opponent owns the turn.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if self.awaiting_opponent() {
            return Err(MoveError::NotHumanTurn);
        }
        self.apply_move(index)
    }

    /// Lets the random opponent play one uniformly chosen empty square.
    ///
    /// Goes through [`GameEngine::apply_move`], so outcome detection is
    /// identical for both sides.
    #[instrument(skip(self))]
    pub fn random_opponent_move(&mut self) -> Result<(Position, Outcome), MoveError> {
        if !self.active {
            return Err(MoveError::GameInactive);
        }
        if !self.awaiting_opponent() {
            return Err(MoveError::NotOpponentTurn);
        }

        let Some(position) = pick_random_square(&self.board, &mut self.rng) else {
            // A full board is always settled as a draw first.
            warn!("Opponent asked to move on a full board");
            debug_assert!(false, "opponent move requested on a full, active board");
            return Err(MoveError::NoEmptySquares);
        };

        let outcome = self.apply_move(position.to_index())?;
        Ok((position, outcome))
    }

    /// Evaluates the board after a move and applies the transition.
    fn settle(&mut self) -> Outcome {
        let outcome = rules::evaluate(&self.board);
        match outcome {
            Outcome::Win { mark, line } => {
                info!(%mark, line = ?line.indices(), board = %self.board.display(), "Game won");
                self.active = false;
            }
            Outcome::Draw => {
                info!(board = %self.board.display(), "Game drawn");
                self.active = false;
            }
            Outcome::InProgress => {
                self.current = self.current.opponent();
            }
        }
        self.outcome = outcome;
        outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark to move, or the winner's mark once the game is won.
    pub fn current_player(&self) -> Mark {
        self.current
    }

    /// Whether moves are accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The selected mode, `None` while inert.
    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    /// Outcome of the last evaluation.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The mark the random opponent plays.
    pub fn opponent_mark(&self) -> Mark {
        self.opponent
    }

    /// Seed of the opponent's random source.
    pub fn rng_seed(&self) -> u64 {
        self.rng.seed()
    }

    /// True while the random opponent owns the turn.
    pub fn awaiting_opponent(&self) -> bool {
        self.active
            && self.mode.is_some_and(|mode| mode.has_opponent())
            && self.current == self.opponent
    }

    /// Serializable view for a presentation layer.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_engine(self)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(mode: GameMode) -> GameEngine {
        let mut engine = GameEngine::with_seed(7);
        engine.start_session(mode);
        engine
    }

    #[test]
    fn test_new_engine_is_inert() {
        let engine = GameEngine::with_seed(0);
        assert!(!engine.is_active());
        assert_eq!(engine.mode(), None);
        assert_eq!(engine.current_player(), Mark::X);
        assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn test_inert_engine_rejects_moves() {
        let mut engine = GameEngine::with_seed(0);
        assert_eq!(engine.apply_move(0), Err(MoveError::GameInactive));
        assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn test_move_toggles_turn() {
        let mut engine = started(GameMode::HumanVsHuman);
        assert_eq!(engine.apply_move(4), Ok(Outcome::InProgress));
        assert_eq!(engine.current_player(), Mark::O);
        assert_eq!(engine.board().get(Position::Center), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut engine = started(GameMode::HumanVsHuman);
        assert_eq!(engine.apply_move(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(engine.current_player(), Mark::X);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_occupied_square_is_rejected() {
        let mut engine = started(GameMode::HumanVsHuman);
        engine.apply_move(0).expect("legal");
        assert_eq!(
            engine.apply_move(0),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
        assert_eq!(engine.current_player(), Mark::O);
        assert_eq!(engine.board().get(Position::TopLeft), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_win_keeps_winner_as_current() {
        let mut engine = started(GameMode::HumanVsHuman);
        for index in [0, 3, 1, 4] {
            engine.apply_move(index).expect("legal");
        }
        let outcome = engine.apply_move(2).expect("legal");
        assert_eq!(outcome.winner(), Some(Mark::X));
        assert_eq!(outcome.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
        assert!(!engine.is_active());
        assert_eq!(engine.current_player(), Mark::X);
        assert_eq!(engine.apply_move(5), Err(MoveError::GameInactive));
    }

    #[test]
    fn test_reset_without_mode_changes_nothing() {
        let mut engine = GameEngine::with_seed(0);
        assert_eq!(engine.reset(), Err(SessionError::NoModeSelected));
        assert!(!engine.is_active());
        assert_eq!(engine.mode(), None);
    }

    #[test]
    fn test_reset_preserves_mode() {
        let mut engine = started(GameMode::HumanVsRandom);
        engine.apply_move(4).expect("legal");
        engine.reset().expect("mode selected");
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.current_player(), Mark::X);
        assert!(engine.is_active());
        assert_eq!(engine.mode(), Some(GameMode::HumanVsRandom));
        assert_eq!(engine.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_human_cannot_play_opponents_turn() {
        let mut engine = started(GameMode::HumanVsRandom);
        engine.human_move(4).expect("legal");
        assert!(engine.awaiting_opponent());
        assert_eq!(engine.human_move(0), Err(MoveError::NotHumanTurn));
        assert!(engine.board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_opponent_refuses_out_of_turn() {
        let mut engine = started(GameMode::HumanVsRandom);
        assert_eq!(engine.random_opponent_move(), Err(MoveError::NotOpponentTurn));

        let mut pvp = started(GameMode::HumanVsHuman);
        pvp.apply_move(0).expect("legal");
        assert_eq!(pvp.random_opponent_move(), Err(MoveError::NotOpponentTurn));
    }

    #[test]
    fn test_opponent_refuses_inactive_game() {
        let mut inert = GameEngine::with_seed(3);
        assert_eq!(inert.random_opponent_move(), Err(MoveError::GameInactive));
        assert_eq!(inert.board(), &Board::new());

        let mut finished = started(GameMode::HumanVsRandom);
        for index in [0, 3, 1, 4, 2] {
            finished.apply_move(index).expect("legal");
        }
        assert!(!finished.is_active());
        let board_before = finished.board().clone();
        assert_eq!(finished.random_opponent_move(), Err(MoveError::GameInactive));
        assert_eq!(finished.board(), &board_before);

        let mut exited = started(GameMode::HumanVsRandom);
        exited.human_move(4).expect("legal");
        exited.exit_session();
        assert_eq!(exited.random_opponent_move(), Err(MoveError::GameInactive));
    }

    #[test]
    fn test_opponent_moves_are_uniform_over_empty_squares() {
        let trials = 10_000;
        let mut counts = [0usize; 9];
        for seed in 0..trials {
            let mut engine = GameEngine::with_seed(seed);
            engine.start_session(GameMode::HumanVsRandom);
            engine.human_move(4).expect("legal");
            let (position, _) = engine.random_opponent_move().expect("opponent's turn");
            assert_ne!(position, Position::Center, "opponent picked an occupied square");
            assert_eq!(engine.board().get(position), Square::Occupied(Mark::O));
            counts[position.to_index()] += 1;
        }

        assert_eq!(counts[Position::Center.to_index()], 0);
        let expected = 1.0 / 8.0;
        for (index, count) in counts.iter().enumerate() {
            if index == Position::Center.to_index() {
                continue;
            }
            let freq = *count as f64 / trials as f64;
            assert!(
                (freq - expected).abs() < 0.03,
                "square {index} picked with frequency {freq}, expected about {expected}"
            );
        }
    }

    #[test]
    fn test_opponent_plays_an_empty_square() {
        let mut engine = started(GameMode::HumanVsRandom);
        engine.human_move(4).expect("legal");
        let (position, outcome) = engine.random_opponent_move().expect("opponent's turn");
        assert_ne!(position, Position::Center);
        assert_eq!(engine.board().get(position), Square::Occupied(Mark::O));
        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(engine.current_player(), Mark::X);
    }

    #[test]
    fn test_opponent_can_play_x() {
        let mut engine = GameEngine::with_seed(11).with_opponent(Mark::X);
        engine.start_session(GameMode::HumanVsRandom);
        assert!(engine.awaiting_opponent());
        let (position, _) = engine.random_opponent_move().expect("opponent opens");
        assert_eq!(engine.board().get(position), Square::Occupied(Mark::X));
        assert!(!engine.awaiting_opponent());
    }
}
