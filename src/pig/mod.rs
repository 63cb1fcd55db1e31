//! Pig: roll a die as often as you dare, bank the points before a 1 wipes
//! them out. First to the target score wins.

pub mod bot;
pub mod config;
pub mod error;
pub mod game;
pub mod player;

pub use bot::Decision;
pub use config::PigConfig;
pub use error::PigError;
pub use game::{PigGame, TurnEvent};
pub use player::{PigPlayer, Turn};
