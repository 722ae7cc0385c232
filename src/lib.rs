//! Tictac - event-driven tic-tac-toe sessions
//!
//! Sits between a presentation layer (browser, terminal, anything that
//! can send a cell index) and the [`tictac_engine`] state machine.
//!
//! # Architecture
//!
//! - **Controller**: maps input events to engine calls and engine
//!   results to notifications
//! - **Runner**: async loop that paces the random opponent
//! - **Config**: TOML-loadable tunables (opponent delay, mark, seed)
//!
//! # Example
//!
//! ```no_run
//! use tictac::{GameEvent, InputEvent, SessionConfig, SessionRunner};
//! use tictac_engine::GameMode;
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (input_tx, input_rx) = mpsc::channel(16);
//! let (event_tx, mut event_rx) = mpsc::unbounded_channel::<GameEvent>();
//! let mut runner = SessionRunner::new(SessionConfig::default(), event_tx);
//! let session = tokio::spawn(async move { runner.run(input_rx).await });
//!
//! input_tx.send(InputEvent::ModeChosen(GameMode::HumanVsRandom)).await?;
//! input_tx.send(InputEvent::CellSelected(4)).await?;
//! drop(input_tx);
//!
//! session.await??;
//! while let Some(event) = event_rx.recv().await {
//!     println!("{event:?}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod events;
mod runner;
mod scheduler;
mod status;
mod telemetry;

pub use config::{ConfigError, SessionConfig};
pub use controller::SessionController;
pub use events::{GameEvent, InputEvent};
pub use runner::SessionRunner;
pub use scheduler::ScheduledMove;
pub use status::StatusMessage;
pub use telemetry::{init_tracing, DEFAULT_FILTER};
