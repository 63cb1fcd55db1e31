use thiserror::Error;

/// Rejected Pig moves and setups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PigError {
    #[error("pig needs 2 to 4 players, got {0}")]
    SeatCount(usize),

    #[error("cannot hold before rolling at least once this turn")]
    HoldBeforeRoll,

    #[error("the game is already won")]
    GameOver,
}
