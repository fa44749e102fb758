// grid.rs - Toroidal grid storage for Conway's Game of Life

use std::fmt;

use crate::{Cell, Error, Result};

/// Square cell buffer whose edges wrap around in both directions.
///
/// The side length is fixed at construction. Cells are stored row-major in a
/// single `Vec`, so each row is a contiguous slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Smallest usable side length (must host a 3x3 pattern with a margin).
    pub const MIN_SIZE: usize = 9;
    /// Largest accepted side length (2^32 cells).
    pub const MAX_SIZE: usize = 1 << 16;

    /// Create an all-OFF `size`×`size` grid.
    pub fn new(size: usize) -> Result<Self> {
        if size < Self::MIN_SIZE {
            return Err(Error::InvalidSize { size, min: Self::MIN_SIZE });
        }
        let len = size
            .checked_mul(size)
            .filter(|_| size <= Self::MAX_SIZE)
            .ok_or(Error::TooLarge { size, max: Self::MAX_SIZE })?;
        Ok(Self {
            size,
            cells: vec![Cell::Off; len],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the cell at a wrapped coordinate. Any integer pair is valid.
    pub fn get(&self, row: isize, col: isize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Set the cell at a wrapped coordinate.
    pub fn set(&mut self, row: isize, col: isize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Independent copy of the whole buffer.
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }

    /// Row `row` as a slice. Panics if `row >= size`.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [Cell] {
        let start = row * self.size;
        &mut self.cells[start..start + self.size]
    }

    /// Number of ON cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_on()).count()
    }

    /// Coordinates of every ON cell, in row-major order.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_on())
            .map(move |(idx, _)| (idx / size, idx % size))
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Off);
    }

    fn wrap(&self, i: isize) -> usize {
        i.rem_euclid(self.size as isize) as usize
    }

    fn index(&self, row: isize, col: isize) -> usize {
        self.wrap(row) * self.size + self.wrap(col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for &cell in self.row(row) {
                f.write_str(if cell.is_on() { "O" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new() {
        let grid = Grid::new(100).unwrap();
        assert_eq!(grid.size(), 100);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_grid_too_small() {
        assert_eq!(Grid::new(8), Err(Error::InvalidSize { size: 8, min: 9 }));
        assert!(Grid::new(0).is_err());
        assert!(Grid::new(9).is_ok());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_grid_size_overflow() {
        assert_eq!(
            Grid::new(1 << 32),
            Err(Error::TooLarge { size: 1 << 32, max: Grid::MAX_SIZE })
        );
    }

    #[test]
    fn test_grid_too_large() {
        assert!(Grid::new(usize::MAX).is_err());
        assert!(Grid::new(Grid::MAX_SIZE + 1).is_err());
    }

    #[test]
    fn test_grid_set_get() {
        let mut grid = Grid::new(10).unwrap();
        grid.set(3, 4, Cell::On);
        assert_eq!(grid.get(3, 4), Cell::On);
        assert_eq!(grid.get(4, 3), Cell::Off);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_grid_wrapping() {
        let mut grid = Grid::new(10).unwrap();
        grid.set(-1, -1, Cell::On);
        assert_eq!(grid.get(9, 9), Cell::On);
        grid.set(10, 10, Cell::On);
        assert_eq!(grid.get(0, 0), Cell::On);
        assert_eq!(grid.get(-20, 30), Cell::On);
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut grid = Grid::new(9).unwrap();
        grid.set(2, 2, Cell::On);
        let snapshot = grid.snapshot();
        grid.set(2, 2, Cell::Off);
        assert_eq!(snapshot.get(2, 2), Cell::On);
        assert_eq!(grid.get(2, 2), Cell::Off);
    }

    #[test]
    fn test_rows_and_live_cells() {
        let mut grid = Grid::new(9).unwrap();
        grid.row_mut(4)[7] = Cell::On;
        grid.set(0, 1, Cell::On);
        assert_eq!(grid.row(4)[7], Cell::On);
        assert_eq!(grid.iter_live().collect::<Vec<_>>(), vec![(0, 1), (4, 7)]);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(9).unwrap();
        grid.set(0, 0, Cell::On);
        let text = grid.to_string();
        assert_eq!(text.lines().count(), 9);
        assert_eq!(text.lines().next(), Some("O........"));
    }
}
