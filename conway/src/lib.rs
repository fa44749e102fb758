//! Conway's Game of Life on a toroidal N×N grid.
//!
//! The crate owns the cell buffer ([`Grid`]), the rule and the double-buffered
//! generation advance ([`engine`]), the seeding strategies ([`seed`]) and the
//! built-in [`patterns`]. Drawing the grid is left to whoever drives the
//! engine: it calls [`Life::advance`] once per frame and reads cells back with
//! [`Life::cell_state`].

pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod seed;

#[cfg(test)]
mod tests;

pub use cell::Cell;
pub use config::{SeedMode, SimConfig};
pub use engine::{Life, advance, advance_into, cell_state, live_neighbors, next_row, next_state};
pub use error::{Error, Result};
pub use grid::Grid;
pub use patterns::Pattern;
pub use seed::{DEFAULT_PROBABILITY, pattern_grid, random_grid, seed_pattern, seed_random};
