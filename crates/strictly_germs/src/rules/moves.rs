//! Legal-move generation.

use crate::{Board, Cell, Coord, Move, MoveKind, Player};
use tracing::instrument;

/// Furthest a piece can travel in one move, in either axis.
const REACH: isize = 2;

/// Lists the legal moves for `player` in discovery order.
///
/// Owned cells are scanned row-major; around each one, offsets are
/// scanned row by row over the 5x5 square it sits in. Every offset at
/// Chebyshev distance 1 or 2 counts, so `(2, 2)` is as good as `(2, 0)`.
///
/// Each empty target is reported once. When several pieces can reach it,
/// the first one found is recorded as the origin and later ones are
/// dropped; that origin is the one a jump empties.
#[instrument(level = "trace", skip(board), fields(size = board.size()))]
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut claimed = vec![false; board.cells().len()];
    let mut moves = Vec::new();

    for origin in board.coords() {
        if board.get(origin) != Some(Cell::Occupied(player)) {
            continue;
        }

        for d_row in -REACH..=REACH {
            for d_col in -REACH..=REACH {
                let distance = d_row.unsigned_abs().max(d_col.unsigned_abs());
                let Some(kind) = MoveKind::from_distance(distance) else {
                    continue;
                };
                let Some(target) = board.offset(origin, d_row, d_col) else {
                    continue;
                };
                if !board.is_empty(target) {
                    continue;
                }
                let Some(idx) = board.index(target) else {
                    continue;
                };
                if claimed[idx] {
                    continue;
                }
                claimed[idx] = true;
                moves.push(Move::new(origin, target, kind));
            }
        }
    }

    moves
}

/// Finds the legal move for `player` that lands on `target`.
#[instrument(level = "trace", skip(board))]
pub fn find_move(board: &Board, player: Player, target: Coord) -> Option<Move> {
    legal_moves(board, player)
        .into_iter()
        .find(|action| action.target == target)
}

/// Number of legal moves available to `player`.
pub fn mobility(board: &Board, player: Player) -> usize {
    legal_moves(board, player).len()
}
