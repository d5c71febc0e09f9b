//! First-class action types for germ war.
//!
//! A move names where a piece comes from and where it lands. The engine
//! generates moves; callers only ever name a target cell and the engine
//! matches it against a freshly generated move list.

use super::{Coord, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a piece reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum MoveKind {
    /// Distance-1 placement; the origin keeps its piece.
    #[display("clone")]
    Clone,
    /// Distance-2 relocation; the origin is emptied.
    #[display("jump")]
    Jump,
}

impl MoveKind {
    /// Classifies a Chebyshev distance, if it is a legal move distance.
    pub fn from_distance(distance: usize) -> Option<Self> {
        match distance {
            1 => Some(MoveKind::Clone),
            2 => Some(MoveKind::Jump),
            _ => None,
        }
    }
}

/// A move: a piece spreading from `origin` to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell that receives the new piece.
    pub target: Coord,
    /// Owned cell the piece comes from.
    pub origin: Coord,
    /// Clone or jump.
    pub kind: MoveKind,
}

impl Move {
    /// Creates a new move.
    pub fn new(origin: Coord, target: Coord, kind: MoveKind) -> Self {
        Self {
            target,
            origin,
            kind,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.kind, self.origin, self.target)
    }
}

/// A move that was applied, with what it changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    /// The player who moved.
    pub player: Player,
    /// The move as matched against the legal-move set.
    pub action: Move,
    /// Opponent cells converted by contagion, in neighbour order.
    pub converted: Vec<Coord>,
}

impl AppliedMove {
    /// Creates a new applied-move record.
    #[instrument]
    pub fn new(player: Player, action: Move, converted: Vec<Coord>) -> Self {
        Self {
            player,
            action,
            converted,
        }
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The game has already reached a terminal state.
    #[display("Game is already over")]
    GameOver,

    /// The target lies outside the board.
    #[display("Cell ({}, {}) is outside the {}x{} board", row, col, size, size)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },

    /// The target cell already holds a piece.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(Coord),

    /// No owned piece can reach the target this turn.
    #[display("Cell {} cannot be reached this turn", _0)]
    NotReachable(Coord),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_distance() {
        assert_eq!(MoveKind::from_distance(0), None);
        assert_eq!(MoveKind::from_distance(1), Some(MoveKind::Clone));
        assert_eq!(MoveKind::from_distance(2), Some(MoveKind::Jump));
        assert_eq!(MoveKind::from_distance(3), None);
    }

    #[test]
    fn test_move_display() {
        let action = Move::new(Coord::new(0, 0), Coord::new(2, 2), MoveKind::Jump);
        assert_eq!(action.origin, Coord::new(0, 0));
        assert_eq!(action.target, Coord::new(2, 2));
        assert_eq!(action.to_string(), "jump (0, 0) -> (2, 2)");
    }

    #[test]
    fn test_error_messages() {
        let err = MoveError::OutOfBounds {
            row: 9,
            col: 1,
            size: 7,
        };
        assert_eq!(err.to_string(), "Cell (9, 1) is outside the 7x7 board");
        assert!(
            MoveError::SquareOccupied(Coord::new(0, 0))
                .to_string()
                .contains("occupied")
        );
    }
}
