//! Async driver for a session.
//!
//! A single task reads [`InputEvent`]s, applies them through the
//! [`SessionController`], and plays the random opponent after its pause.
//! Everything happens on one task, so each event runs to completion
//! before the next is looked at.

use crate::config::SessionConfig;
use crate::controller::SessionController;
use crate::events::{GameEvent, InputEvent};
use crate::scheduler::{next_due, ScheduledMove};
use anyhow::Result;
use tictac_engine::GameEngine;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Runs one session against a presentation layer.
pub struct SessionRunner {
    controller: SessionController,
    config: SessionConfig,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    pending: Option<ScheduledMove>,
}

impl SessionRunner {
    /// Creates a runner with an inert engine built from `config`.
    pub fn new(config: SessionConfig, event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        let engine = config.build_engine();
        Self::with_engine(engine, config, event_tx)
    }

    /// Creates a runner around an existing engine.
    pub fn with_engine(
        engine: GameEngine,
        config: SessionConfig,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            controller: SessionController::new(engine),
            config,
            event_tx,
            pending: None,
        }
    }

    /// The engine being driven.
    pub fn engine(&self) -> &GameEngine {
        self.controller.engine()
    }

    /// Processes input until the input channel closes.
    ///
    /// A move already scheduled when input closes is still played.
    #[instrument(skip_all, fields(seed = self.engine().rng_seed()))]
    pub async fn run(&mut self, mut input_rx: mpsc::Receiver<InputEvent>) -> Result<()> {
        info!("Starting session loop");
        let mut input_open = true;

        while input_open || self.pending.is_some() {
            tokio::select! {
                input = input_rx.recv(), if input_open => match input {
                    Some(input) => self.on_input(input)?,
                    None => {
                        debug!("Input channel closed");
                        input_open = false;
                    }
                },
                () = next_due(&mut self.pending) => {
                    self.pending = None;
                    self.on_opponent_due()?;
                }
            }
        }

        info!("Session loop finished");
        Ok(())
    }

    fn on_input(&mut self, input: InputEvent) -> Result<()> {
        if matches!(
            input,
            InputEvent::ModeChosen(_) | InputEvent::RestartRequested | InputEvent::ExitRequested
        ) && self.pending.take().is_some()
        {
            debug!(?input, "Cancelled pending opponent move");
        }

        let events = self.controller.handle(input);
        self.publish(events)?;
        self.schedule_if_needed()
    }

    fn on_opponent_due(&mut self) -> Result<()> {
        debug!("Opponent move due");
        let events = self.controller.play_opponent();
        self.publish(events)?;
        self.schedule_if_needed()
    }

    fn schedule_if_needed(&mut self) -> Result<()> {
        if self.controller.awaiting_opponent() && self.pending.is_none() {
            let delay = self.config.opponent_delay();
            let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
            debug!(delay_ms, "Scheduling opponent move");
            self.pending = Some(ScheduledMove::after(delay));
            self.event_tx.send(GameEvent::OpponentThinking)?;
        }
        Ok(())
    }

    fn publish(&self, events: Vec<GameEvent>) -> Result<()> {
        for event in events {
            self.event_tx.send(event)?;
        }
        Ok(())
    }
}
