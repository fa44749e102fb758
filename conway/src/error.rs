// error.rs - Errors raised while building or seeding a grid

use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The grid is too small to host the smallest pattern.
    #[error("grid size {size} is below the minimum of {min}")]
    InvalidSize { size: usize, min: usize },
    /// The cell buffer for this side length cannot be allocated.
    #[error("grid size {size} exceeds the maximum of {max}")]
    TooLarge { size: usize, max: usize },
    /// Seed probability outside `[0, 1]`.
    #[error("probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
    /// A pattern stamp would run past the grid edge.
    #[error("pattern {name:?} ({height}x{width}) at ({row}, {col}) does not fit in a {size}x{size} grid")]
    PatternOutOfBounds {
        name: &'static str,
        height: usize,
        width: usize,
        row: usize,
        col: usize,
        size: usize,
    },
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
