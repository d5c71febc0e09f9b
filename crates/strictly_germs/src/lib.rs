//! Strictly Germs - contagion board game rules engine
//!
//! Two players spread pieces across a square grid. A piece can clone
//! into a neighbouring cell or jump two cells away, and every opponent
//! piece touching the landing cell converts. The game ends when a player
//! runs out of moves; whoever holds more cells wins.
//!
//! # Architecture
//!
//! - **State**: [`GameState`] owns the board, the turn and the outcome
//! - **Rules**: move generation, contagion and terminal detection
//! - **Contracts**: preconditions that classify rejected moves, and
//!   postconditions checked in debug builds
//! - **Agents**: random and greedy one-ply move selection
//! - **Session**: vs-computer / vs-player game controller
//!
//! # Example
//!
//! ```
//! use strictly_germs::{Agent, GameState, HeuristicAgent, Player};
//!
//! let mut game = GameState::new(7).unwrap();
//! assert!(game.apply_move(0, 1));
//! assert_eq!(game.current_player(), Player::B);
//!
//! let mut agent = HeuristicAgent::new();
//! let reply = agent.select_move(&game).unwrap();
//! assert!(game.apply_move(reply.target.row, reply.target.col));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod agent;
mod config;
mod outcome;
mod session;
mod snapshot;
mod state;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Core types
pub use types::{
    Board, BoardSizeError, Cell, Coord, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
    Player,
};

// Crate-level exports - Actions
pub use action::{AppliedMove, Move, MoveError, MoveKind};

// Crate-level exports - Game state
pub use outcome::{Outcome, ScoreBoard};
pub use snapshot::Snapshot;
pub use state::GameState;

// Crate-level exports - Agents
pub use agent::{
    Agent, CENTRALITY_WEIGHT, HeuristicAgent, MOBILITY_WEIGHT, RandomAgent, Strategy, evaluate,
};

// Crate-level exports - Session and configuration
pub use config::{ConfigError, GameConfig};
pub use session::{GameMode, Session};
