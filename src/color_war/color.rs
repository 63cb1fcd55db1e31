use rand::Rng;

use super::error::ColorWarError;

/// One of the six paint colors a cell can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Blue,
    Cyan,
    Green,
    Magenta,
    Red,
    Yellow,
}

impl Color {
    /// The palette in key order (Blue is 1, Yellow is 6)
    pub const ALL: [Color; 6] = [
        Color::Blue,
        Color::Cyan,
        Color::Green,
        Color::Magenta,
        Color::Red,
        Color::Yellow,
    ];

    /// Number shown on the palette and typed by human players
    pub fn number(&self) -> u8 {
        match self {
            Color::Blue => 1,
            Color::Cyan => 2,
            Color::Green => 3,
            Color::Magenta => 4,
            Color::Red => 5,
            Color::Yellow => 6,
        }
    }

    /// Look up a color by its palette number
    pub fn from_number(number: u8) -> Result<Self, ColorWarError> {
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.number() == number)
            .ok_or(ColorWarError::UnknownColor(number))
    }

    /// Index into the palette, used for per-color tallies
    pub fn index(&self) -> usize {
        usize::from(self.number() - 1)
    }

    /// Draw a color uniformly from the palette
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}
