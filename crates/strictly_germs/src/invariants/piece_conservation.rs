//! Piece conservation: every cell is either empty or owned by one player.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: `count(A) + count(B) + empty == size²`.
pub struct PieceConservationInvariant;

impl Invariant<GameState> for PieceConservationInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let area = board.size() * board.size();
        board.cells().len() == area
            && board.count(Player::A) + board.count(Player::B) + board.empty_count() == area
    }

    fn description() -> &'static str {
        "Pieces and empty cells cover the board exactly"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        for size in [3, 7, 12] {
            let game = GameState::new(size).unwrap();
            assert!(PieceConservationInvariant::holds(&game));
        }
    }

    #[test]
    fn test_holds_after_jump() {
        let mut game = GameState::new(7).unwrap();
        assert!(game.apply_move(0, 2));
        assert!(PieceConservationInvariant::holds(&game));
        assert_eq!(game.score().total(), 49);
    }
}
