use thiserror::Error;

use super::player::PlayerId;

/// Reasons a color pick is rejected. The UI ignores these and re-prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorWarError {
    #[error("no color with number {0} in the palette")]
    UnknownColor(u8),

    #[error("color {0} is already held by player {1}")]
    ColorTaken(u8, PlayerId),

    #[error("the game is already decided")]
    GameOver,
}
