pub mod color_war;
pub mod pig;
pub mod snake;
pub mod terminal;

pub use color_war::ColorWarMode;
pub use pig::PigMode;
pub use snake::SnakeMode;
