//! Three terminal games: Color War, Pig and Snake
//!
//! This library provides:
//! - Game rules for each game, free of terminal I/O (color_war, pig, snake)
//! - Key mapping (input) and ratatui rendering (render)
//! - Async terminal loops tying them together (modes)

pub mod color_war;
pub mod config;
pub mod controller;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod pig;
pub mod render;
pub mod snake;
