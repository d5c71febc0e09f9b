//! Complete game state and its single mutation entry point.

use super::contracts::{Contract, MoveContract};
use super::rules;
use super::{
    AppliedMove, Board, BoardSizeError, Cell, Coord, DEFAULT_BOARD_SIZE, Move, MoveError,
    MoveKind, Outcome, Player, ScoreBoard, Snapshot,
};
use serde::Serialize;
use tracing::{debug, instrument};

/// Complete game state.
///
/// A state is owned by exactly one context: the live session, or an
/// agent's private simulation copy. It only changes through
/// [`GameState::try_apply_move`] (or [`GameState::apply_move`]) and
/// re-initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move.
    current_player: Player,
    /// Set once the game is over; never cleared except by re-initialization.
    terminal: bool,
    /// Present exactly when `terminal` is set.
    winner: Option<Outcome>,
}

impl GameState {
    /// Creates and initializes a game on a `size` x `size` board.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        let mut state = Self::with_board(Board::new(size)?, Player::A);
        state.initialize();
        Ok(state)
    }

    /// Wraps an arbitrary position as a live (non-terminal) game.
    ///
    /// No terminal check is run; call [`GameState::detect_terminal`] to
    /// settle a position that may already be over.
    pub fn with_board(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
            terminal: false,
            winner: None,
        }
    }

    /// Clears the board and places the seed pieces.
    ///
    /// Player A takes the main-diagonal corners, player B the
    /// anti-diagonal corners, and A moves first.
    #[instrument(skip(self), fields(size = self.board.size()))]
    pub fn initialize(&mut self) {
        let last = self.board.size() - 1;
        self.board.clear();
        self.board.put(Coord::new(0, 0), Cell::Occupied(Player::A));
        self.board.put(Coord::new(last, last), Cell::Occupied(Player::A));
        self.board.put(Coord::new(0, last), Cell::Occupied(Player::B));
        self.board.put(Coord::new(last, 0), Cell::Occupied(Player::B));
        self.current_player = Player::A;
        self.terminal = false;
        self.winner = None;
        debug!("Board initialized");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board side length.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true once the game is over.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns the outcome of a finished game.
    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    /// Counts the pieces a player owns.
    pub fn count(&self, player: Player) -> usize {
        self.board.count(player)
    }

    /// Counts the empty cells.
    pub fn empty_count(&self) -> usize {
        self.board.empty_count()
    }

    /// Returns the piece tally.
    pub fn score(&self) -> ScoreBoard {
        ScoreBoard::tally(&self.board)
    }

    /// Lists the legal moves for `player` in discovery order.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        rules::legal_moves(&self.board, player)
    }

    /// Lists the moves the player to move may make (none once terminal).
    pub fn current_legal_moves(&self) -> Vec<Move> {
        if self.terminal {
            return Vec::new();
        }
        self.legal_moves(self.current_player)
    }

    /// Returns a read-only view for display collaborators.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }

    /// Places a piece for the player to move at (`row`, `col`).
    ///
    /// Returns `false` and leaves the state untouched if the move is
    /// rejected; see [`GameState::try_apply_move`] for the reason.
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        self.try_apply_move(row, col).is_ok()
    }

    /// Places a piece for the player to move at (`row`, `col`).
    ///
    /// The target is matched against a freshly generated legal-move list,
    /// so a stale list held by the caller cannot smuggle in a move. On
    /// success, a jump empties its origin, the target is claimed,
    /// adjacent opponent pieces convert, the turn passes and the
    /// terminal check runs.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only; a failure restores
    ///   the prior state before the error is returned
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_apply_move(&mut self, row: usize, col: usize) -> Result<AppliedMove, MoveError> {
        let target = Coord::new(row, col);
        let action = MoveContract::pre(self, &target)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mover = self.current_player;
        if action.kind == MoveKind::Jump {
            self.board.put(action.origin, Cell::Empty);
        }
        self.board.put(target, Cell::Occupied(mover));
        let converted = rules::spread(&mut self.board, target, mover);
        self.current_player = mover.opponent();
        self.detect_terminal();

        let applied = AppliedMove::new(mover, action, converted);

        #[cfg(debug_assertions)]
        {
            let checked = MoveContract::post(&before, self)
                .and_then(|()| super::contracts::ChangeIsLocal::check(&before, self, &applied));
            if let Err(e) = checked {
                tracing::warn!(error = %e, "Postcondition failed, restoring prior state");
                *self = before;
                return Err(e);
            }
        }

        debug!(%action, converted = applied.converted.len(), "Move applied");
        Ok(applied)
    }

    /// Runs the terminal check on the current position.
    ///
    /// Has no effect on a game that is already over. Returns whether the
    /// game is over afterwards.
    #[instrument(skip(self))]
    pub fn detect_terminal(&mut self) -> bool {
        if self.terminal {
            return true;
        }
        if let Some(outcome) = rules::detect(&mut self.board) {
            self.terminal = true;
            self.winner = Some(outcome);
            debug!(%outcome, score = ?self.score(), "Game over");
        }
        self.terminal
    }
}

impl Default for GameState {
    fn default() -> Self {
        let mut state = Self::with_board(Board::blank(DEFAULT_BOARD_SIZE), Player::A);
        state.initialize();
        state
    }
}
