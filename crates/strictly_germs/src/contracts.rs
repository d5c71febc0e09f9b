//! Contract-based validation for germ war.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{AppliedMove, Move, MoveError, MoveKind};
use super::invariants::{GermInvariants, InvariantSet};
use super::rules;
use super::{Cell, Coord, GameState};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// What a satisfied precondition proves (e.g. the matched move).
    type Witness;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Witness, MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be running.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails once the state is terminal.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The target must lie on the board.
pub struct TargetOnBoard;

impl TargetOnBoard {
    /// Fails for coordinates outside `[0, size)`.
    pub fn check(target: Coord, game: &GameState) -> Result<(), MoveError> {
        if game.board().contains(target) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                row: target.row,
                col: target.col,
                size: game.size(),
            })
        }
    }
}

/// Precondition: The target cell must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails if a piece already sits on the target.
    pub fn check(target: Coord, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(target) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(target))
        }
    }
}

/// Precondition: One of the mover's pieces must reach the target.
pub struct TargetReachable;

impl TargetReachable {
    /// Matches the target against a freshly generated move list.
    #[instrument(level = "trace", skip(game))]
    pub fn check(target: Coord, game: &GameState) -> Result<Move, MoveError> {
        rules::find_move(game.board(), game.current_player(), target)
            .ok_or(MoveError::NotReachable(target))
    }
}

/// Composite precondition: game running, target on board, empty and reachable.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions, returning the matched move.
    #[instrument(skip(game))]
    pub fn check(target: Coord, game: &GameState) -> Result<Move, MoveError> {
        GameNotOver::check(game)?;
        TargetOnBoard::check(target, game)?;
        SquareIsEmpty::check(target, game)?;
        TargetReachable::check(target, game)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placement actions.
///
/// Preconditions:
/// - Game not over
/// - Target on the board, empty, and reachable this turn
///
/// Postconditions:
/// - Pieces plus empties still cover the board
/// - Outcome recorded exactly when terminal, and it matches the majority
/// - Terminal flag agrees with mobility
/// - Turn passed to the opponent
pub struct MoveContract;

impl Contract<GameState, Coord> for MoveContract {
    type Witness = Move;

    fn pre(game: &GameState, target: &Coord) -> Result<Move, MoveError> {
        LegalPlacement::check(*target, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.current_player() != before.current_player().opponent() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: turn did not pass".to_string(),
            ));
        }

        GermInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition locality
// ─────────────────────────────────────────────────────────────

/// Postcondition: A move only changes the cells it is allowed to.
///
/// Allowed changes are the target itself, the origin of a jump (emptied),
/// opponent pieces adjacent to the target (converted), and, when the move
/// ended the game, empty cells claimed by forfeiture.
pub struct ChangeIsLocal;

impl ChangeIsLocal {
    /// Compares boards before and after `applied`.
    #[instrument(level = "trace", skip_all)]
    pub fn check(
        before: &GameState,
        after: &GameState,
        applied: &AppliedMove,
    ) -> Result<(), MoveError> {
        let mover = Cell::Occupied(applied.player);
        let victim = Cell::Occupied(applied.player.opponent());
        let action = applied.action;

        for coord in before.board().coords() {
            let old = before.board().get(coord);
            let new = after.board().get(coord);
            if old == new {
                continue;
            }

            let allowed = if coord == action.target {
                new == Some(mover)
            } else if coord == action.origin && action.kind == MoveKind::Jump {
                new == Some(Cell::Empty)
            } else if coord.chebyshev(action.target) == 1 && old == Some(victim) {
                new == Some(mover)
            } else {
                after.is_terminal() && old == Some(Cell::Empty)
            };

            if !allowed {
                warn!(%coord, ?old, ?new, %action, "Non-local board change");
                return Err(MoveError::InvariantViolation(format!(
                    "Postcondition failed: cell {} changed outside the move's reach",
                    coord
                )));
            }
        }

        Ok(())
    }
}
