//! Ownership masks and the flood-fill that grows them.
//!
//! A player's territory grows into every cell that is 4-adjacent to cells it
//! already owns, carries the player's current color and is not owned by
//! anyone. Growth runs from a worklist seeded with the whole territory, so
//! it reaches the fixed point in one call without recursion.

use std::collections::VecDeque;

use super::board::{Board, Cell};
use super::color::Color;

/// Boolean ownership matrix with a maintained count of owned cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    size: usize,
    owned: Vec<bool>,
    count: usize,
}

impl Territory {
    /// Empty territory for a `size` x `size` board
    pub fn new(size: usize) -> Self {
        Self {
            size,
            owned: vec![false; size * size],
            count: 0,
        }
    }

    /// Out-of-board cells are never owned
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size && self.owned[cell.row * self.size + cell.col]
    }

    /// Mark a cell as owned. Returns false when it was owned already, in
    /// which case the count is left alone.
    pub fn claim(&mut self, cell: Cell) -> bool {
        let index = cell.row * self.size + cell.col;
        if self.owned[index] {
            return false;
        }
        self.owned[index] = true;
        self.count += 1;
        true
    }

    /// Number of owned cells
    pub fn count(&self) -> usize {
        self.count
    }

    /// Owned cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size;
        self.owned
            .iter()
            .enumerate()
            .filter(|(_, owned)| **owned)
            .map(move |(index, _)| Cell::new(index / size, index % size))
    }

    /// Whether the two territories share any cell
    pub fn intersects(&self, other: &Territory) -> bool {
        self.owned
            .iter()
            .zip(other.owned.iter())
            .any(|(mine, theirs)| *mine && *theirs)
    }
}

/// Grow `territory` through cells of `color` that neither it nor `rival`
/// owns, until nothing more can be added. Returns the number of cells
/// claimed.
pub fn propagate(board: &Board, territory: &mut Territory, rival: &Territory, color: Color) -> usize {
    let size = board.size();
    let mut worklist: VecDeque<Cell> = territory.cells().collect();
    let mut claimed = 0;

    while let Some(cell) = worklist.pop_front() {
        for next in cell.neighbors(size) {
            if board.get(next) != color || rival.contains(next) {
                continue;
            }
            if territory.claim(next) {
                claimed += 1;
                worklist.push_back(next);
            }
        }
    }

    claimed
}
