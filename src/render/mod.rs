pub mod color_war;
pub mod pig;
pub mod snake;

pub use color_war::ColorWarRenderer;
pub use pig::PigRenderer;
pub use snake::SnakeRenderer;
