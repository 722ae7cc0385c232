//! The automated opponent: a uniform pick among empty squares.
//!
//! No lookahead, no heuristics. Every empty square is equally likely.

use crate::position::Position;
use crate::rng::SessionRng;
use crate::types::Board;
use tracing::{debug, instrument};

/// Picks one empty square uniformly at random.
///
/// Returns `None` on a full board.
#[instrument(skip_all)]
pub fn pick_random_square(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available = board.empty_positions();
    if available.is_empty() {
        return None;
    }
    let choice = available[rng.random_range(0..available.len())];
    debug!(position = %choice, candidates = available.len(), "Opponent chose square");
    Some(choice)
}
