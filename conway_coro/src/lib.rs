// lib.rs - Game of Life advanced by one coroutine per row

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use conway::{Cell, Grid, next_row};
use log::trace;

/// Number of past generations remembered for cycle detection.
pub const HISTORY_LEN: usize = 10;

/// Row coroutine: computes row `row_index` of the next generation from the
/// shared frozen snapshot.
pub async fn process_row(row_index: usize, current_grid: Arc<Grid>) -> (usize, Vec<Cell>) {
    let mut row_result = vec![Cell::Off; current_grid.size()];
    next_row(&current_grid, row_index, &mut row_result);

    tokio::task::yield_now().await; // Cooperative yielding
    (row_index, row_result)
}

/// Advance one generation with every row running as its own task.
///
/// All tasks read the same snapshot. The new grid is only assembled once
/// every row has come back, so callers never see a half-updated generation.
pub async fn advance_rows(grid: &Grid) -> Grid {
    let snapshot = Arc::new(grid.snapshot());

    let handles: Vec<_> = (0..grid.size())
        .map(|row| tokio::spawn(process_row(row, Arc::clone(&snapshot))))
        .collect();

    let mut next_grid = grid.snapshot();
    for handle in handles {
        let (row_index, completed_row) = match handle.await {
            Ok(result) => result,
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        };
        next_grid.row_mut(row_index).copy_from_slice(&completed_row);
    }
    trace!("row tasks finished, population {}", next_grid.population());
    next_grid
}

/// Headless simulation state driven by the tick loop in `main`.
pub struct Simulation {
    grid: Grid,
    generation: u64,
    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        let mut sim = Self {
            grid,
            generation: 0,
            grid_history: [0; HISTORY_LEN],
            history_count: 0,
        };
        sim.remember_current();
        sim
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation. Returns `true` if the new grid repeats one of
    /// the last `HISTORY_LEN` generations.
    pub async fn step(&mut self) -> bool {
        self.grid = advance_rows(&self.grid).await;
        self.generation += 1;
        self.check_for_cycle()
    }

    pub fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.grid.hash(&mut hasher);
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.hash_grid();
        let seen = self.history_count.min(HISTORY_LEN);
        if self.grid_history[..seen].contains(&current_hash) {
            return true;
        }
        self.remember(current_hash);
        false
    }

    fn remember_current(&mut self) {
        let hash = self.hash_grid();
        self.remember(hash);
    }

    fn remember(&mut self, hash: u64) {
        self.grid_history[self.history_count % HISTORY_LEN] = hash;
        self.history_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use conway::patterns::{BLINKER, BLOCK, GLIDER};
    use conway::{advance, pattern_grid, random_grid};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[tokio::test]
    async fn test_rows_match_serial_advance() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut grid = random_grid(40, 0.3, &mut rng).unwrap();
        for _ in 0..5 {
            let expected = advance(&grid);
            grid = advance_rows(&grid).await;
            assert_eq!(grid, expected);
        }
    }

    #[tokio::test]
    async fn test_glider_moves() {
        let start = pattern_grid(20, &GLIDER, 1, 1).unwrap();
        let mut sim = Simulation::new(start.clone());
        for _ in 0..4 {
            assert!(!sim.step().await);
        }
        assert_eq!(sim.generation(), 4);
        let moved: Vec<_> = sim.grid().iter_live().collect();
        let expected: Vec<_> = start.iter_live().map(|(r, c)| (r + 1, c + 1)).collect();
        assert_eq!(moved, expected);
    }

    #[tokio::test]
    async fn test_still_life_is_a_cycle() {
        let mut sim = Simulation::new(pattern_grid(12, &BLOCK, 4, 4).unwrap());
        assert!(sim.step().await);
    }

    #[tokio::test]
    async fn test_oscillator_cycle() {
        let mut sim = Simulation::new(pattern_grid(12, &BLINKER, 4, 4).unwrap());
        assert!(!sim.step().await);
        assert!(sim.step().await);
        assert_eq!(sim.generation(), 2);
    }

    #[tokio::test]
    async fn test_history_wraps_without_false_cycle() {
        let mut sim = Simulation::new(pattern_grid(20, &GLIDER, 1, 1).unwrap());
        for _ in 0..12 {
            assert!(!sim.step().await);
        }
        assert_eq!(sim.history_count, 13);
        assert_eq!(sim.grid().population(), 5);
    }

    #[tokio::test]
    async fn test_oscillator_found_after_wrap() {
        let mut sim = Simulation::new(pattern_grid(12, &BLINKER, 4, 4).unwrap());
        // Push the starting generation out of the ring.
        for fake in 1..=12 {
            sim.remember(fake);
        }
        assert!(sim.history_count > HISTORY_LEN);
        assert!(!sim.step().await);
        assert!(!sim.step().await);
        assert!(sim.step().await);
        assert_eq!(sim.generation(), 3);
    }
}
