//! Session configuration
//!
//! Fixed when a session is created; never changed while it runs.
//! Can be loaded from a JSON file, missing fields fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Game rules and timing for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Board ===
    pub columns: i32,
    pub rows: i32,
    pub num_walls: usize,
    pub num_bombs: usize,
    /// Coins placed at session start (the spawner adds more later)
    pub num_coins: usize,

    // === Timing ===
    pub tick_interval_ms: u64,
    pub spawn_interval_ms: u64,

    // === Rules ===
    pub win_score: u64,
    pub starting_lives: u8,
    pub bonus_award: u64,
    pub coin_award: u64,
    /// Bonus coin chance is `bonus_odds_num / bonus_odds_den`
    pub bonus_odds_num: u32,
    pub bonus_odds_den: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: COLUMNS,
            rows: ROWS,
            num_walls: NUM_WALLS,
            num_bombs: NUM_BOMBS,
            num_coins: NUM_COINS,

            tick_interval_ms: TICK_INTERVAL_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,

            win_score: WIN_SCORE,
            starting_lives: STARTING_LIVES,
            bonus_award: BONUS_AWARD,
            coin_award: COIN_AWARD,
            bonus_odds_num: BONUS_ODDS_NUM,
            bonus_odds_den: BONUS_ODDS_DEN,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject configs the rule engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns <= 0 || self.rows <= 0 {
            return Err(ConfigError::Invalid(format!(
                "board must be at least 1x1, got {}x{}",
                self.columns, self.rows
            )));
        }
        if self.columns > MAX_BOARD_SIDE || self.rows > MAX_BOARD_SIDE {
            return Err(ConfigError::Invalid(format!(
                "board may be at most {MAX_BOARD_SIDE}x{MAX_BOARD_SIDE}, got {}x{}",
                self.columns, self.rows
            )));
        }
        // Walls and bombs are redrawn until they miss the spawn tile
        let tiles = i64::from(self.columns) * i64::from(self.rows);
        if tiles < 2 && (self.num_walls > 0 || self.num_bombs > 0) {
            return Err(ConfigError::Invalid(
                "a 1x1 board leaves no room for walls or bombs".to_string(),
            ));
        }
        if self.tick_interval_ms == 0 || self.spawn_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick and spawn intervals must be non-zero".to_string(),
            ));
        }
        if self.bonus_odds_den == 0 || self.bonus_odds_num > self.bonus_odds_den {
            return Err(ConfigError::Invalid(format!(
                "bonus odds {}/{} are not a probability",
                self.bonus_odds_num, self.bonus_odds_den
            )));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Invalid("starting lives must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let config = GameConfig::default();
        assert_eq!(config.columns, 20);
        assert_eq!(config.rows, 15);
        assert_eq!(config.win_score, 3000);
        assert_eq!(config.starting_lives, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "columns": 8, "win_score": 500 }"#).unwrap();
        assert_eq!(config.columns, 8);
        assert_eq!(config.win_score, 500);
        assert_eq!(config.rows, 15);
        assert_eq!(config.tick_interval_ms, 25);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "columns": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "columns": 1, "rows": 1 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "bonus_odds_num": 12 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "tick_interval_ms": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_oversized_board_rejected() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "columns": 65536, "rows": 65536 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "columns": 2147483647, "rows": 2 }"#),
            Err(ConfigError::Invalid(_))
        ));
        let config = GameConfig::from_json(r#"{ "columns": 1024, "rows": 1024 }"#).unwrap();
        assert_eq!(config.columns * config.rows, 1024 * 1024);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(GameConfig::from_json("{ nope"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            GameConfig::load("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
