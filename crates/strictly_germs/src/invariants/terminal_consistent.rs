//! Terminal consistency: the terminal flag agrees with mobility.

use super::super::{GameState, Player, rules};
use super::Invariant;

/// Invariant: a settled game is over iff the board is full or nobody can move.
///
/// After every terminal check, a live game has both players mobile (one
/// stuck player triggers forfeiture), and a finished game is either full
/// or frozen for both sides.
pub struct TerminalConsistentInvariant;

impl Invariant<GameState> for TerminalConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let a_mobile = rules::mobility(board, Player::A) > 0;
        let b_mobile = rules::mobility(board, Player::B) > 0;

        if game.is_terminal() {
            board.is_full() || (!a_mobile && !b_mobile)
        } else {
            a_mobile && b_mobile && !board.is_full()
        }
    }

    fn description() -> &'static str {
        "Game is over exactly when the board is full or no player can move"
    }
}
