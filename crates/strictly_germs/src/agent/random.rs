//! Random agent that uniformly samples from legal moves.

use super::Agent;
use crate::{GameState, Move};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Random agent that uniformly samples from legal moves.
///
/// The generator is injected so games can be replayed from a seed.
#[derive(Debug, Clone)]
pub struct RandomAgent<R = StdRng> {
    rng: R,
}

impl RandomAgent<StdRng> {
    /// Creates a reproducible agent from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates an agent seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomAgent<R> {
    /// Creates an agent drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + std::fmt::Debug> Agent for RandomAgent<R> {
    #[instrument(skip_all, fields(player = %state.current_player()))]
    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        let moves = state.current_legal_moves();
        if moves.is_empty() {
            debug!("No legal moves");
            return None;
        }

        let idx = self.rng.random_range(0..moves.len());
        let action = moves.get(idx).copied();
        debug!(idx, candidates = moves.len(), "Random agent chose move");
        action
    }

    fn name(&self) -> &str {
        "Random"
    }
}
