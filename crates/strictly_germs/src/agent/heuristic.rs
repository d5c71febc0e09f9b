//! Greedy one-ply agent.

use super::Agent;
use crate::{Coord, GameState, Move, Player, rules};
use tracing::{debug, instrument, trace, warn};

/// Weight of each owned cell's closeness to the centre.
pub const CENTRALITY_WEIGHT: f64 = 0.1;

/// Weight of the difference in available moves.
pub const MOBILITY_WEIGHT: f64 = 0.5;

/// Scores a position from `player`'s point of view.
///
/// `material + 0.1 * centrality + 0.5 * mobility`, where material is the
/// piece difference, centrality sums `size - manhattan(cell, centre)` over
/// `player`'s cells (centre rounded down on both axes), and mobility is
/// the difference in legal-move counts.
#[instrument(level = "trace", skip(state))]
pub fn evaluate(state: &GameState, player: Player) -> f64 {
    let board = state.board();
    let opponent = player.opponent();
    let size = board.size();
    let centre = Coord::new(size / 2, size / 2);

    let material = board.count(player) as f64 - board.count(opponent) as f64;

    let centrality: f64 = board
        .coords()
        .filter(|&coord| board.get(coord).and_then(|cell| cell.owner()) == Some(player))
        .map(|coord| size as f64 - coord.manhattan(centre) as f64)
        .sum();

    let mobility =
        rules::mobility(board, player) as f64 - rules::mobility(board, opponent) as f64;

    material + CENTRALITY_WEIGHT * centrality + MOBILITY_WEIGHT * mobility
}

/// Greedy agent: plays the move whose immediate result scores best.
///
/// Each candidate is applied to a private clone of the game and the
/// result is scored with [`evaluate`]. No deeper search is done. Ties go
/// to the candidate generated first.
#[derive(Debug, Clone, Default)]
pub struct HeuristicAgent;

impl HeuristicAgent {
    /// Creates a new heuristic agent.
    pub fn new() -> Self {
        Self
    }

    /// Scores every candidate for the player to move, in generator order.
    #[instrument(skip_all, fields(player = %state.current_player()))]
    pub fn rank(&self, state: &GameState) -> Vec<(Move, f64)> {
        let player = state.current_player();
        let mut ranked = Vec::new();

        for action in state.current_legal_moves() {
            let mut probe = state.clone();
            let target = action.target;
            if let Err(e) = probe.try_apply_move(target.row, target.col) {
                warn!(%action, error = %e, "Simulation rejected a generated move");
                continue;
            }
            let score = evaluate(&probe, player);
            trace!(%action, score, "Candidate scored");
            ranked.push((action, score));
        }

        ranked
    }
}

impl Agent for HeuristicAgent {
    #[instrument(skip_all, fields(player = %state.current_player()))]
    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        let mut best: Option<(Move, f64)> = None;
        for (action, score) in self.rank(state) {
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((action, score));
            }
        }

        if let Some((action, score)) = best {
            debug!(%action, score, "Heuristic agent chose move");
        }
        best.map(|(action, _)| action)
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, MoveKind};

    fn position(size: usize, pieces: &[(usize, usize, Player)], to_move: Player) -> GameState {
        let mut board = Board::new(size).unwrap();
        for &(row, col, player) in pieces {
            board.set(Coord::new(row, col), Cell::Occupied(player)).unwrap();
        }
        GameState::with_board(board, to_move)
    }

    #[test]
    fn test_evaluate_initial_position_is_balanced() {
        let state = GameState::new(7).unwrap();
        assert_eq!(evaluate(&state, Player::A), evaluate(&state, Player::B));
        // Material 0, mobility 0, corners are 6 from the centre on a 7x7.
        assert!((evaluate(&state, Player::A) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_counts_material() {
        let state = position(
            5,
            &[(0, 0, Player::A), (0, 1, Player::A), (4, 4, Player::B)],
            Player::A,
        );
        let material_only = evaluate(&state, Player::A)
            - CENTRALITY_WEIGHT * (1.0 + 2.0)
            - MOBILITY_WEIGHT
                * (rules::mobility(state.board(), Player::A) as f64
                    - rules::mobility(state.board(), Player::B) as f64);
        assert!((material_only - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rank_keeps_generator_order() {
        let state = GameState::new(7).unwrap();
        let agent = HeuristicAgent::new();
        let ranked: Vec<Move> = agent.rank(&state).into_iter().map(|(m, _)| m).collect();
        assert_eq!(ranked, state.current_legal_moves());
    }

    #[test]
    fn test_ties_go_to_first_candidate() {
        // Jumping either A corner toward the centre scores the same; the
        // (0, 0) piece is scanned first.
        let state = GameState::new(7).unwrap();
        let mut agent = HeuristicAgent::new();
        let first = Move::new(Coord::new(0, 0), Coord::new(2, 2), MoveKind::Jump);
        let mirror = Move::new(Coord::new(6, 6), Coord::new(4, 4), MoveKind::Jump);

        let ranked = agent.rank(&state);
        let score_of = |action: Move| {
            ranked
                .iter()
                .find(|(m, _)| *m == action)
                .map(|(_, s)| *s)
                .unwrap()
        };
        assert_eq!(score_of(first), score_of(mirror));
        assert!(ranked.iter().all(|(_, s)| *s <= score_of(first)));

        assert_eq!(agent.select_move(&state), Some(first));
    }
}
