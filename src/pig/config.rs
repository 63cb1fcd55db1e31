use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::PigError;
use crate::controller::Controller;

pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 4;

/// Configuration for a Pig game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PigConfig {
    /// One entry per seat, in seating order
    pub seats: Vec<Controller>,
    /// Banked points needed to win
    pub target_score: u32,
    /// Pause between bot decisions, in milliseconds
    pub bot_delay_ms: u64,
}

impl Default for PigConfig {
    fn default() -> Self {
        Self {
            seats: vec![Controller::Human, Controller::Bot],
            target_score: 100,
            bot_delay_ms: 700,
        }
    }
}

impl PigConfig {
    pub fn new(seats: Vec<Controller>) -> Self {
        Self {
            seats,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), PigError> {
        if (MIN_SEATS..=MAX_SEATS).contains(&self.seats.len()) {
            Ok(())
        } else {
            Err(PigError::SeatCount(self.seats.len()))
        }
    }

    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }
}
