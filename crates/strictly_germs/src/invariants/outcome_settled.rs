//! Outcome settled invariant: a winner exists exactly when the game is over.

use super::super::{GameState, rules};
use super::Invariant;

/// Invariant: `winner` is set iff `terminal`, and matches the piece majority.
pub struct OutcomeSettledInvariant;

impl Invariant<GameState> for OutcomeSettledInvariant {
    fn holds(game: &GameState) -> bool {
        match (game.is_terminal(), game.winner()) {
            (false, None) => true,
            (true, Some(outcome)) => outcome == rules::score(game.board()),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Outcome is recorded exactly when the game is over and matches the majority"
    }
}
