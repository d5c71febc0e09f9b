//! Contagion: a placed piece converts the opponent pieces touching it.

use crate::{Board, Cell, Coord, Player};
use tracing::{instrument, trace};

/// Converts every opponent piece among the eight cells around `target`.
///
/// Returns the converted cells in neighbour order. Cells further than one
/// step away are never touched.
#[instrument(level = "trace", skip(board))]
pub fn spread(board: &mut Board, target: Coord, mover: Player) -> Vec<Coord> {
    let victim = Cell::Occupied(mover.opponent());
    let infected: Vec<Coord> = board
        .neighbours(target)
        .filter(|&coord| board.get(coord) == Some(victim))
        .collect();

    for &coord in &infected {
        board.put(coord, Cell::Occupied(mover));
    }

    trace!(converted = infected.len(), "Contagion spread");
    infected
}
