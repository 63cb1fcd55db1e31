//! Application configuration: one section per game, loaded from an
//! optional JSON file and then overridden from the command line.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color_war::ColorWarConfig;
use crate::pig::{PigConfig, PigError};
use crate::snake::SnakeConfig;

/// Smallest board that still has distinct home corners and a middle
pub const MIN_FIELD_SIZE: usize = 3;
/// Largest board the layouts are drawn for
pub const MAX_FIELD_SIZE: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{game} size must be between 3 and 25, got {size}")]
    FieldSize { game: &'static str, size: usize },

    #[error("snake needs at least one life")]
    NoLives,

    #[error("snake of length {length} does not fit a field of size {size}")]
    SnakeTooLong { length: usize, size: usize },

    #[error(transparent)]
    Pig(#[from] PigError),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub color_war: ColorWarConfig,
    pub pig: PigConfig,
    pub snake: SnakeConfig,
    /// Fixed RNG seed for reproducible games
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Read a JSON config file; missing sections and fields take defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_size("color war", self.color_war.board_size)?;
        check_size("snake", self.snake.field_size)?;

        if self.snake.lives == 0 {
            return Err(ConfigError::NoLives);
        }
        // The snake starts in the middle of the field heading up
        let room = self.snake.field_size - self.snake.field_size / 2;
        if self.snake.initial_length == 0 || self.snake.initial_length > room {
            return Err(ConfigError::SnakeTooLong {
                length: self.snake.initial_length,
                size: self.snake.field_size,
            });
        }

        self.pig.validate()?;
        Ok(())
    }
}

fn check_size(game: &'static str, size: usize) -> Result<(), ConfigError> {
    if (MIN_FIELD_SIZE..=MAX_FIELD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(ConfigError::FieldSize { game, size })
    }
}
