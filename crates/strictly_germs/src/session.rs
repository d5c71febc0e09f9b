//! Game session: one live game plus who is playing it.

use super::{
    Agent, AppliedMove, BoardSizeError, GameConfig, GameState, MoveError, Player, Snapshot,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who sits across the board from player A.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GameMode {
    /// One side is played by an agent.
    #[default]
    VsComputer,
    /// Two humans share the board.
    VsPlayer,
}

/// A live game and the players attached to it.
///
/// The session owns its [`GameState`] exclusively. Input handlers call
/// [`Session::human_move`]; after a successful human move in
/// [`GameMode::VsComputer`] the caller invokes [`Session::agent_turn`],
/// possibly after a pause of its choosing.
#[derive(Debug)]
pub struct Session {
    state: GameState,
    mode: GameMode,
    automated_player: Player,
    agent: Option<Box<dyn Agent>>,
}

impl Session {
    /// Creates a two-human session.
    #[instrument]
    pub fn vs_player(size: usize) -> Result<Self, BoardSizeError> {
        info!("Creating vs-player session");
        Ok(Self {
            state: GameState::new(size)?,
            mode: GameMode::VsPlayer,
            automated_player: Player::B,
            agent: None,
        })
    }

    /// Creates a session where `agent` plays `automated_player`.
    #[instrument(skip(agent), fields(agent = agent.name()))]
    pub fn vs_computer(
        size: usize,
        automated_player: Player,
        agent: Box<dyn Agent>,
    ) -> Result<Self, BoardSizeError> {
        info!("Creating vs-computer session");
        Ok(Self {
            state: GameState::new(size)?,
            mode: GameMode::VsComputer,
            automated_player,
            agent: Some(agent),
        })
    }

    /// Creates a session from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Result<Self, BoardSizeError> {
        match config.mode() {
            GameMode::VsPlayer => Self::vs_player(*config.board_size()),
            GameMode::VsComputer => Self::vs_computer(
                *config.board_size(),
                *config.automated_player(),
                config.strategy().build(*config.seed()),
            ),
        }
    }

    /// Returns the live game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the session mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the side the agent plays, if any.
    pub fn automated_player(&self) -> Option<Player> {
        self.agent.as_ref().map(|_| self.automated_player)
    }

    /// Returns a read-only view for display collaborators.
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// True when the agent should move next.
    pub fn is_agent_turn(&self) -> bool {
        self.mode == GameMode::VsComputer
            && self.agent.is_some()
            && !self.state.is_terminal()
            && self.state.current_player() == self.automated_player
    }

    /// Places a piece for the human to move.
    ///
    /// In vs-computer mode, input while the agent is to move is refused
    /// with [`MoveError::WrongPlayer`].
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn human_move(&mut self, row: usize, col: usize) -> Result<AppliedMove, MoveError> {
        if self.is_agent_turn() {
            debug!("Ignoring input during the agent's turn");
            return Err(MoveError::WrongPlayer(self.automated_player));
        }
        let applied = self.state.try_apply_move(row, col)?;
        self.log_if_finished();
        Ok(applied)
    }

    /// Lets the agent make its move, if it is the agent's turn.
    ///
    /// Returns the applied move, or `None` when it was not the agent's
    /// turn or the agent had nothing to play.
    #[instrument(skip(self))]
    pub fn agent_turn(&mut self) -> Option<AppliedMove> {
        if !self.is_agent_turn() {
            return None;
        }
        let agent = self.agent.as_mut()?;
        let action = agent.select_move(&self.state)?;

        match self.state.try_apply_move(action.target.row, action.target.col) {
            Ok(applied) => {
                debug!(agent = agent.name(), %action, "Agent moved");
                self.log_if_finished();
                Some(applied)
            }
            Err(e) => {
                warn!(agent = agent.name(), %action, error = %e, "Agent chose an illegal move");
                None
            }
        }
    }

    /// Starts a fresh game on the same board size.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state.initialize();
        info!("Session restarted");
    }

    fn log_if_finished(&self) {
        if let Some(outcome) = self.state.winner() {
            let score = self.state.score();
            info!(
                %outcome,
                player_a = score.player_a,
                player_b = score.player_b,
                "Game finished"
            );
        }
    }
}
