//! Move selection for the automated player.
//!
//! Agents never touch the live game. They read it, and the heuristic
//! agent probes candidate moves on private clones.

mod heuristic;
mod random;

pub use heuristic::{CENTRALITY_WEIGHT, HeuristicAgent, MOBILITY_WEIGHT, evaluate};
pub use random::RandomAgent;

use crate::{GameState, Move};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Trait for anything that can choose moves for the player to move.
pub trait Agent: std::fmt::Debug {
    /// Chooses a move for `state.current_player()`.
    ///
    /// Returns `None` when the game is over or the player has no move.
    /// A returned move is always one of the state's current legal moves.
    fn select_move(&mut self, state: &GameState) -> Option<Move>;

    /// Returns the agent's display name.
    fn name(&self) -> &str;
}

/// Which agent to field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
    /// Uniformly random legal move ("easy").
    #[default]
    Random,
    /// Greedy one-ply evaluation ("hard").
    Heuristic,
}

impl Strategy {
    /// Builds an agent for this strategy.
    ///
    /// `seed` makes the random agent reproducible; without one it draws
    /// from OS entropy. The heuristic agent is deterministic and ignores it.
    #[instrument]
    pub fn build(self, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            Strategy::Random => match seed {
                Some(seed) => Box::new(RandomAgent::seeded(seed)),
                None => Box::new(RandomAgent::from_entropy()),
            },
            Strategy::Heuristic => Box::new(HeuristicAgent::new()),
        }
    }
}
