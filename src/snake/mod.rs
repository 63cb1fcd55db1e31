//! Snake: steer a growing snake towards apples without hitting the walls or
//! yourself.
//!
//! This module contains the game rules without any I/O or rendering, so the
//! terminal mode and the tests drive it the same way.

pub mod config;
pub mod engine;
pub mod state;

pub use config::SnakeConfig;
pub use engine::{SnakeEngine, StepOutcome};
pub use state::{Collision, Direction, Position, Snake, SnakeState, Status};
