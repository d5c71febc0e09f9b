//! Read-only view of a game for display and score collaborators.

use super::{Cell, GameState, Move, Outcome, Player, ScoreBoard};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw one frame.
///
/// Snapshots are detached copies; holding one never blocks or affects
/// the game they were taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board side length.
    pub size: usize,
    /// Cells, one vector per row from the top.
    pub cells: Vec<Vec<Cell>>,
    /// Player to move.
    pub current_player: Player,
    /// Whether the game is over.
    pub terminal: bool,
    /// Outcome once the game is over.
    pub winner: Option<Outcome>,
    /// Piece counts.
    pub score: ScoreBoard,
    /// Moves open to the player to move, for highlighting.
    pub legal_moves: Vec<Move>,
}

impl From<&GameState> for Snapshot {
    fn from(game: &GameState) -> Self {
        Self {
            size: game.size(),
            cells: game.board().rows().map(<[Cell]>::to_vec).collect(),
            current_player: game.current_player(),
            terminal: game.is_terminal(),
            winner: game.winner(),
            score: game.score(),
            legal_moves: game.current_legal_moves(),
        }
    }
}
