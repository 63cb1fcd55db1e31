use serde::{Deserialize, Serialize};

/// Who makes the decisions for a seat.
///
/// Selected once at setup; the game loops ask the controller whether to wait
/// for a keypress or to run the matching heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    /// Moves come from the keyboard
    Human,
    /// Moves come from the built-in heuristic
    Bot,
}

impl Controller {
    pub fn is_bot(&self) -> bool {
        matches!(self, Controller::Bot)
    }
}
