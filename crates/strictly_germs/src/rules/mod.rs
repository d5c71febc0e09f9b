//! Game rules for germ war.
//!
//! Pure functions over a [`Board`](crate::Board): which moves exist,
//! how a placement infects its surroundings, and when the game is over.
//! Rules are kept apart from the state machine so the agent can reuse
//! them on its own simulation copies.

pub mod contagion;
pub mod moves;
pub mod terminal;

pub use contagion::spread;
pub use moves::{find_move, legal_moves, mobility};
pub use terminal::{detect, forfeit_fill, score};
