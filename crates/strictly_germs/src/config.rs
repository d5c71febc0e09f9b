//! Game configuration loaded from TOML.

use super::{DEFAULT_BOARD_SIZE, GameMode, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Player, Strategy};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a game session.
///
/// ```toml
/// board_size = 7
/// mode = "vs_computer"
/// strategy = "heuristic"
/// automated_player = "B"
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Who sits across the board.
    #[serde(default)]
    mode: GameMode,

    /// How the automated player picks moves.
    #[serde(default)]
    strategy: Strategy,

    /// Which side the automated player takes.
    #[serde(default = "default_automated_player")]
    automated_player: Player,

    /// Seed for the random agent; OS entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

#[instrument]
fn default_automated_player() -> Player {
    Player::B
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            mode: GameMode::default(),
            strategy: Strategy::default(),
            automated_player: default_automated_player(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Creates a configuration, validating the board size.
    #[instrument]
    pub fn new(
        board_size: usize,
        mode: GameMode,
        strategy: Strategy,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            board_size,
            mode,
            strategy,
            automated_player: default_automated_player(),
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            board_size = config.board_size,
            mode = %config.mode,
            strategy = %config.strategy,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::new(format!(
                "board_size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.board_size(), 7);
        assert_eq!(*config.mode(), GameMode::VsComputer);
        assert_eq!(*config.strategy(), Strategy::Random);
        assert_eq!(*config.automated_player(), Player::B);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_full_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            board_size = 9
            mode = "vs_player"
            strategy = "heuristic"
            automated_player = "A"
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(*config.board_size(), 9);
        assert_eq!(*config.mode(), GameMode::VsPlayer);
        assert_eq!(*config.strategy(), Strategy::Heuristic);
        assert_eq!(*config.automated_player(), Player::A);
        assert_eq!(*config.seed(), Some(42));
    }

    #[test]
    fn test_rejects_bad_size() {
        let err = GameConfig::from_toml_str("board_size = 1").unwrap_err();
        assert!(err.message.contains("board_size"));
        assert!(GameConfig::new(40, GameMode::VsPlayer, Strategy::Random, None).is_err());
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        let err = GameConfig::from_toml_str("strategy = \"minimax\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
