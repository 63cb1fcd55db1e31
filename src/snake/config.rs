use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the Snake game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Width and height of the playing field
    pub field_size: usize,
    /// Initial length of the snake
    pub initial_length: usize,
    /// Lives at the start of a game
    pub lives: u32,
    /// Frames (game steps) per second
    pub fps: u32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            field_size: 25,
            initial_length: 4,
            lives: 3,
            fps: 12,
        }
    }
}

impl SnakeConfig {
    /// Create a configuration with a custom field size
    pub fn new(field_size: usize) -> Self {
        Self {
            field_size,
            ..Default::default()
        }
    }

    /// Time between two game steps
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SnakeConfig::default();
        assert_eq!(config.field_size, 25);
        assert_eq!(config.initial_length, 4);
        assert_eq!(config.lives, 3);
    }

    #[test]
    fn test_frame_interval() {
        let config = SnakeConfig::default();
        assert_eq!(config.frame_interval(), Duration::from_nanos(83_333_333));

        let stalled = SnakeConfig {
            fps: 0,
            ..SnakeConfig::default()
        };
        assert_eq!(stalled.frame_interval(), Duration::from_secs(1));
    }
}
