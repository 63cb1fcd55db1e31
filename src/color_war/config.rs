use serde::{Deserialize, Serialize};

use crate::controller::Controller;

/// Configuration for a Color War game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorWarConfig {
    /// Width and height of the square board
    pub board_size: usize,
    /// Who plays the bottom-left seat
    pub player_one: Controller,
    /// Who plays the top-right seat
    pub player_two: Controller,
    /// Delay before a bot move, in milliseconds
    pub bot_delay_ms: u64,
}

impl Default for ColorWarConfig {
    fn default() -> Self {
        Self {
            board_size: 25,
            player_one: Controller::Human,
            player_two: Controller::Bot,
            bot_delay_ms: 400,
        }
    }
}

impl ColorWarConfig {
    /// Create a configuration with a custom board size
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ColorWarConfig::default();
        assert_eq!(config.board_size, 25);
        assert_eq!(config.player_one, Controller::Human);
        assert_eq!(config.player_two, Controller::Bot);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ColorWarConfig =
            serde_json::from_str(r#"{ "board_size": 10, "player_two": "human" }"#).unwrap();
        assert_eq!(config.board_size, 10);
        assert_eq!(config.player_two, Controller::Human);
        assert_eq!(config.bot_delay_ms, 400);
    }
}
