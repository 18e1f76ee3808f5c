//! Computer opponent move selection.

pub mod greedy;
pub mod random;

pub use greedy::GreedySelector;
pub use random::RandomSelector;

use crate::rules::LegalMoves;
use crate::types::{AiStrategy, Position};

/// Picks one move out of a non-empty legal set.
///
/// Implementations only see the capture lists, never the board.
pub trait MoveSelector: Send {
    /// Returns `None` only when `moves` is empty.
    fn select_move(&mut self, moves: &LegalMoves) -> Option<Position>;
}

/// Builds the selector for `strategy`. `seed` only matters for [`AiStrategy::Basic`].
pub fn selector_for(strategy: AiStrategy, seed: u64) -> Box<dyn MoveSelector> {
    match strategy {
        AiStrategy::Basic => Box::new(RandomSelector::from_seed(seed)),
        AiStrategy::Advanced => Box::new(GreedySelector),
    }
}
