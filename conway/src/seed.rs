// seed.rs - Seeding strategies: uniform random fill and pattern placement

use log::debug;
use rand::Rng;

use crate::{Cell, Error, Grid, Pattern, Result};

/// Default chance of a cell starting ON in a random fill.
pub const DEFAULT_PROBABILITY: f64 = 0.2;

/// Set every cell ON independently with probability `probability`.
///
/// The random source is supplied by the caller; pass a seeded
/// `rand::rngs::StdRng` for reproducible grids.
pub fn seed_random<R: Rng + ?Sized>(grid: &mut Grid, probability: f64, rng: &mut R) -> Result<()> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(Error::InvalidProbability(probability));
    }
    for row in 0..grid.size() {
        for cell in grid.row_mut(row) {
            *cell = Cell::from(rng.gen_bool(probability));
        }
    }
    debug!(
        "random fill p={probability}: {} of {} cells on",
        grid.population(),
        grid.size() * grid.size()
    );
    Ok(())
}

/// Stamp `pattern` with its top-left corner at `(row, col)`.
///
/// The whole bounding box is overwritten, OFF cells included. The box must fit
/// inside the grid without wrapping.
pub fn seed_pattern(grid: &mut Grid, pattern: &Pattern, row: usize, col: usize) -> Result<()> {
    let size = grid.size();
    let fits = row
        .checked_add(pattern.height())
        .zip(col.checked_add(pattern.width()))
        .is_some_and(|(bottom, right)| bottom <= size && right <= size);
    if !fits {
        return Err(Error::PatternOutOfBounds {
            name: pattern.name(),
            height: pattern.height(),
            width: pattern.width(),
            row,
            col,
            size,
        });
    }

    for r in 0..pattern.height() {
        let target = &mut grid.row_mut(row + r)[col..col + pattern.width()];
        for (c, slot) in target.iter_mut().enumerate() {
            *slot = pattern.cell(r, c);
        }
    }
    debug!("stamped {} at ({row}, {col})", pattern.name());
    Ok(())
}

/// New `size`×`size` grid filled at random.
pub fn random_grid<R: Rng + ?Sized>(size: usize, probability: f64, rng: &mut R) -> Result<Grid> {
    let mut grid = Grid::new(size)?;
    seed_random(&mut grid, probability, rng)?;
    Ok(grid)
}

/// New all-OFF grid with a single pattern stamped at `(row, col)`.
pub fn pattern_grid(size: usize, pattern: &Pattern, row: usize, col: usize) -> Result<Grid> {
    let mut grid = Grid::new(size)?;
    seed_pattern(&mut grid, pattern, row, col)?;
    Ok(grid)
}
