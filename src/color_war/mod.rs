//! Color War: two players flood a board of six colors.
//!
//! Each turn the current player switches to a new color and absorbs every
//! connected cell of that color touching their territory. Pure game logic;
//! rendering and input live in `render` and `modes`.

pub mod board;
pub mod bot;
pub mod color;
pub mod config;
pub mod error;
pub mod player;
pub mod state;
pub mod territory;

pub use board::{Board, Cell};
pub use color::Color;
pub use config::ColorWarConfig;
pub use error::ColorWarError;
pub use player::{Player, PlayerId};
pub use state::{ColorWarState, Outcome, TurnReport};
pub use territory::{Territory, propagate};
