//! Tic-tac-toe session engine.
//!
//! A [`GameEngine`] owns one session: the 3x3 [`Board`], the mark to
//! move, whether moves are accepted, and the selected [`GameMode`]. Moves
//! are validated, applied and evaluated in a single call, and the
//! automated opponent picks uniformly among empty squares.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{GameEngine, GameMode, Mark, Outcome};
//!
//! let mut engine = GameEngine::with_seed(1);
//! engine.start_session(GameMode::HumanVsHuman);
//! for index in [0, 3, 1, 4] {
//!     engine.apply_move(index).unwrap();
//! }
//! let outcome = engine.apply_move(2).unwrap();
//! assert_eq!(outcome.winner(), Some(Mark::X));
//! assert!(!engine.is_active());
//! # let _ = Outcome::Draw;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod mode;
mod opponent;
mod position;
mod rng;
pub mod rules;
mod snapshot;
mod types;

pub use action::{Move, MoveError};
pub use engine::{GameEngine, SessionError};
pub use mode::GameMode;
pub use opponent::pick_random_square;
pub use position::Position;
pub use rng::SessionRng;
pub use rules::{Outcome, WinCondition, WIN_CONDITIONS};
pub use snapshot::GameSnapshot;
pub use types::{Board, Mark, Square};
