use std::fmt;

use super::board::{Board, Cell};
use super::color::Color;
use super::territory::{Territory, propagate};
use crate::controller::Controller;

/// Seat identity. Player One starts bottom-left, Player Two top-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn number(&self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Starting corner on a board of the given size
    pub fn home(&self, size: usize) -> Cell {
        match self {
            PlayerId::One => Cell::new(size - 1, 0),
            PlayerId::Two => Cell::new(0, size - 1),
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A Color War player
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub color: Color,
    pub controller: Controller,
    territory: Territory,
}

impl Player {
    pub fn new(id: PlayerId, color: Color, controller: Controller, board_size: usize) -> Self {
        Self {
            id,
            color,
            controller,
            territory: Territory::new(board_size),
        }
    }

    pub fn territory(&self) -> &Territory {
        &self.territory
    }

    pub fn has_cell(&self, cell: Cell) -> bool {
        self.territory.contains(cell)
    }

    pub fn add_cell(&mut self, cell: Cell) -> bool {
        self.territory.claim(cell)
    }

    pub fn cell_count(&self) -> usize {
        self.territory.count()
    }

    /// Flood the territory through the player's current color, leaving
    /// the rival's cells alone. Returns the number of cells gained.
    pub fn conquer(&mut self, board: &Board, rival: &Player) -> usize {
        propagate(board, &mut self.territory, &rival.territory, self.color)
    }
}
