//! Delayed opponent moves.

use std::pin::Pin;
use std::time::Duration;
use tokio::time::Sleep;

/// An opponent move due at a fixed deadline.
///
/// Dropping it cancels the move.
#[derive(Debug)]
pub struct ScheduledMove {
    sleep: Pin<Box<Sleep>>,
}

impl ScheduledMove {
    /// Schedules a move `delay` from now.
    pub fn after(delay: Duration) -> Self {
        Self {
            sleep: Box::pin(tokio::time::sleep(delay)),
        }
    }

    /// Completes at the deadline.
    pub async fn wait(&mut self) {
        self.sleep.as_mut().await;
    }
}

/// Completes when the pending move is due; never completes without one.
pub async fn next_due(pending: &mut Option<ScheduledMove>) {
    match pending {
        Some(scheduled) => scheduled.wait().await,
        None => std::future::pending().await,
    }
}
