use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ai::MoveSelector;
use crate::rules::LegalMoves;
use crate::types::Position;

/// Basic opponent: every legal move is equally likely.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: SmallRng,
}

impl RandomSelector {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl MoveSelector for RandomSelector {
    fn select_move(&mut self, moves: &LegalMoves) -> Option<Position> {
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        moves.as_slice().get(idx).map(|mv| mv.position)
    }
}
