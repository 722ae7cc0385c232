//! Synchronous event handling for one session.
//!
//! Turns [`InputEvent`]s into engine calls and engine results into
//! [`GameEvent`]s. Illegal moves are absorbed here: they are logged and
//! produce no notifications.

use crate::events::{GameEvent, InputEvent};
use crate::status::StatusMessage;
use tictac_engine::{GameEngine, Outcome, SessionError};
use tracing::{debug, instrument};

/// Owns a [`GameEngine`] and reacts to input.
#[derive(Debug, Clone)]
pub struct SessionController {
    engine: GameEngine,
}

impl SessionController {
    /// Wraps an engine, usually inert.
    pub fn new(engine: GameEngine) -> Self {
        Self { engine }
    }

    /// The engine being driven.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// True while the random opponent owns the turn.
    pub fn awaiting_opponent(&self) -> bool {
        self.engine.awaiting_opponent()
    }

    /// Handles one input event and returns the notifications it caused.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: InputEvent) -> Vec<GameEvent> {
        match input {
            InputEvent::CellSelected(index) => match self.engine.human_move(index) {
                Ok(outcome) => self.after_move(outcome),
                Err(e) => {
                    debug!(index, error = %e, "Ignoring cell selection");
                    Vec::new()
                }
            },
            InputEvent::ModeChosen(mode) => {
                self.engine.start_session(mode);
                self.refreshed()
            }
            InputEvent::RestartRequested => match self.engine.reset() {
                Ok(()) => self.refreshed(),
                Err(SessionError::NoModeSelected) => {
                    vec![GameEvent::Status(StatusMessage::SelectModeFirst)]
                }
            },
            InputEvent::ExitRequested => {
                self.engine.exit_session();
                self.refreshed()
            }
        }
    }

    /// Plays the random opponent's move.
    ///
    /// Does nothing if the opponent no longer owns the turn.
    #[instrument(skip(self))]
    pub fn play_opponent(&mut self) -> Vec<GameEvent> {
        match self.engine.random_opponent_move() {
            Ok((_, outcome)) => self.after_move(outcome),
            Err(e) => {
                debug!(error = %e, "Skipping opponent move");
                Vec::new()
            }
        }
    }

    fn after_move(&self, outcome: Outcome) -> Vec<GameEvent> {
        let mut events = Vec::with_capacity(4);
        if let Some(last) = self.engine.history().last() {
            events.push(GameEvent::MoveMade {
                mark: last.mark,
                position: last.position,
            });
        }
        events.extend(self.refreshed());
        if outcome.is_terminal() {
            events.push(GameEvent::GameOver(outcome));
        }
        events
    }

    fn refreshed(&self) -> Vec<GameEvent> {
        vec![
            GameEvent::StateChanged(self.engine.snapshot()),
            GameEvent::Status(StatusMessage::for_engine(&self.engine)),
        ]
    }
}
