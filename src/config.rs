use crate::battle::state::TieBreak;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("max_name_length must be at least 1")]
    InvalidNameLength,
}

/// Settings for the interactive game. Every field has a default, so a config
/// file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub catalog_path: PathBuf,
    pub max_name_length: usize,
    /// Pause between rendered rounds.
    pub round_delay_ms: u64,
    pub opponent_name: String,
    pub tie_break: TieBreak,
    /// Fixed seed for damage rolls and the opponent's roster; random when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/creatures.csv"),
            max_name_length: 12,
            round_delay_ms: 1_500,
            opponent_name: "Gary".to_string(),
            tie_break: TieBreak::Initiative,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load a RON config file.
    pub fn load(path: &Path) -> Result<GameConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_name_length == 0 {
            return Err(ConfigError::InvalidNameLength);
        }
        Ok(())
    }
}
