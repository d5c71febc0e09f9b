//! Game outcome and piece tallies.

use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player holds strictly more pieces.
    Winner(Player),
    /// Both players hold the same number of pieces.
    Draw,
}

impl Outcome {
    /// Decides the outcome from final piece counts.
    pub fn from_counts(player_a: usize, player_b: usize) -> Self {
        match player_a.cmp(&player_b) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::A),
            std::cmp::Ordering::Less => Outcome::Winner(Player::B),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Piece counts for the score display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    /// Cells held by player A.
    pub player_a: usize,
    /// Cells held by player B.
    pub player_b: usize,
    /// Cells held by nobody.
    pub empty: usize,
}

impl ScoreBoard {
    /// Tallies a board.
    pub fn tally(board: &Board) -> Self {
        Self {
            player_a: board.count(Player::A),
            player_b: board.count(Player::B),
            empty: board.empty_count(),
        }
    }

    /// Returns the count for one player.
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::A => self.player_a,
            Player::B => self.player_b,
        }
    }

    /// Total number of cells tallied.
    pub fn total(&self) -> usize {
        self.player_a + self.player_b + self.empty
    }

    /// Who would win if the game ended now.
    pub fn leader(&self) -> Outcome {
        Outcome::from_counts(self.player_a, self.player_b)
    }
}
