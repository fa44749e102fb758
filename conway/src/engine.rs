// engine.rs - The B3/S23 rule and the double-buffered generation advance
//
// Every new cell is computed from a frozen copy of the previous generation;
// nothing is ever updated in place while neighbours are still being read.

use log::trace;

use crate::{Cell, Grid};

/// Neighbour offsets of the Moore neighbourhood.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Apply Conway's rule to one cell with `total` live neighbours.
pub fn next_state(cell: Cell, total: u8) -> Cell {
    match (cell, total) {
        (Cell::On, 2) | (Cell::On, 3) => Cell::On,   // Survival
        (Cell::Off, 3)                => Cell::On,   // Birth
        _                             => Cell::Off,  // Death or stays dead
    }
}

/// Count ON cells among the 8 wrapped neighbours of `(row, col)`.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (row, col) = (row as isize, col as isize);
    NEIGHBORS
        .iter()
        .filter(|&&(dr, dc)| grid.get(row + dr, col + dc).is_on())
        .count() as u8
}

/// Read accessor for renderers.
pub fn cell_state(grid: &Grid, row: isize, col: isize) -> Cell {
    grid.get(row, col)
}

/// Compute row `row` of the next generation into `out`.
pub fn next_row(current: &Grid, row: usize, out: &mut [Cell]) {
    assert_eq!(out.len(), current.size(), "row buffer does not match grid size");
    let cells = current.row(row);
    for (col, slot) in out.iter_mut().enumerate() {
        *slot = next_state(cells[col], live_neighbors(current, row, col));
    }
}

/// Fill `next` with the generation after `current`.
///
/// Panics if the two buffers differ in size; that is a caller bug, not a
/// recoverable condition.
pub fn advance_into(current: &Grid, next: &mut Grid) {
    assert_eq!(
        current.size(),
        next.size(),
        "snapshot and target grid sizes differ"
    );
    for row in 0..current.size() {
        next_row(current, row, next.row_mut(row));
    }
}

/// Pure form of the advance: returns the next generation as a new grid.
pub fn advance(grid: &Grid) -> Grid {
    let mut next = grid.snapshot();
    advance_into(grid, &mut next);
    next
}

/// Stateful engine holding two buffers that swap roles every generation.
#[derive(Debug, Clone)]
pub struct Life {
    current: Grid,
    next: Grid,
    generation: u64,
}

impl Life {
    pub fn new(grid: Grid) -> Self {
        let next = grid.snapshot();
        Self {
            current: grid,
            next,
            generation: 0,
        }
    }

    /// Advance exactly one generation and return the new grid.
    pub fn advance(&mut self) -> &Grid {
        advance_into(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        trace!(
            "generation {} population {}",
            self.generation,
            self.current.population()
        );
        &self.current
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Mutable access for editing between generations (e.g. toggling cells).
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.current
    }

    pub fn cell_state(&self, row: isize, col: isize) -> Cell {
        cell_state(&self.current, row, col)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn into_grid(self) -> Grid {
        self.current
    }
}
