use rand::Rng;

use super::color::Color;

/// A cell coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Orthogonal neighbors inside a `size` x `size` board, in the order
    /// up, right, down, left.
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Cell> {
        let Cell { row, col } = self;
        let up = (row > 0).then(|| Cell::new(row - 1, col));
        let right = (col + 1 < size).then(|| Cell::new(row, col + 1));
        let down = (row + 1 < size).then(|| Cell::new(row + 1, col));
        let left = (col > 0).then(|| Cell::new(row, col - 1));
        [up, right, down, left].into_iter().flatten()
    }
}

/// Square grid of colored cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Color>,
}

impl Board {
    /// Board of a single color
    pub fn filled(size: usize, color: Color) -> Self {
        Self {
            size,
            cells: vec![color; size * size],
        }
    }

    /// Board with every cell drawn uniformly from the palette
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let cells = (0..size * size).map(|_| Color::random(rng)).collect();
        Self { size, cells }
    }

    /// Build a board from rows of palette numbers
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            assert_eq!(row.len(), size, "board rows must form a square");
            for &number in row.iter() {
                let color = Color::from_number(number)
                    .unwrap_or_else(|err| panic!("bad fixture cell: {err}"));
                cells.push(color);
            }
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells on the board
    pub fn area(&self) -> usize {
        self.size * self.size
    }

    pub fn get(&self, cell: Cell) -> Color {
        self.cells[self.index(cell)]
    }

    pub fn set(&mut self, cell: Cell, color: Color) {
        let index = self.index(cell);
        self.cells[index] = color;
    }

    fn index(&self, cell: Cell) -> usize {
        debug_assert!(cell.row < self.size && cell.col < self.size);
        cell.row * self.size + cell.col
    }
}
