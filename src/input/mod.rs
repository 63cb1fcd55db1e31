pub mod handler;

pub use handler::{ColorWarCommand, InputHandler, PigCommand, SnakeCommand};
