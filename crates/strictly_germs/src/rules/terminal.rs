//! End-of-game detection and scoring.

use super::moves::legal_moves;
use crate::{Board, Cell, Outcome, Player};
use tracing::{debug, instrument};

/// Decides the winner by strict piece majority; equal counts draw.
#[instrument(level = "trace", skip(board))]
pub fn score(board: &Board) -> Outcome {
    Outcome::from_counts(board.count(Player::A), board.count(Player::B))
}

/// Hands every empty cell to `player`, returning how many were filled.
#[instrument(skip(board))]
pub fn forfeit_fill(board: &mut Board, player: Player) -> usize {
    let empties: Vec<_> = board.coords().filter(|&c| board.is_empty(c)).collect();
    for &coord in &empties {
        board.put(coord, Cell::Occupied(player));
    }
    empties.len()
}

/// Checks whether the game is over, applying forfeiture if it is due.
///
/// - Neither player can move: the game ends as it stands.
/// - Exactly one player can move: that player takes every empty cell,
///   then the game ends.
/// - The board is full: the game ends.
///
/// Returns the outcome when the game has ended, `None` otherwise.
#[instrument(skip(board), fields(size = board.size()))]
pub fn detect(board: &mut Board) -> Option<Outcome> {
    let a_stuck = legal_moves(board, Player::A).is_empty();
    let b_stuck = legal_moves(board, Player::B).is_empty();

    match (a_stuck, b_stuck) {
        (true, true) => {
            debug!("Neither player can move");
        }
        (true, false) | (false, true) => {
            let mobile = if a_stuck { Player::B } else { Player::A };
            let filled = forfeit_fill(board, mobile);
            debug!(player = %mobile, filled, "Opponent stuck, filling remaining cells");
        }
        (false, false) if board.is_full() => {
            debug!("Board is full");
        }
        (false, false) => return None,
    }

    Some(score(board))
}
