// patterns.rs - Built-in seed patterns

use crate::{Cell, Error, Result};

/// A fixed rectangle of cells. `cells` lists the ON offsets inside the
/// `height`×`width` box; every other cell of the box is OFF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    name: &'static str,
    height: usize,
    width: usize,
    cells: &'static [(usize, usize)],
}

/// ```text
/// ..O
/// O.O
/// .OO
/// ```
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    height: 3,
    width: 3,
    cells: &[(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)],
};

pub const BLOCK: Pattern = Pattern {
    name: "block",
    height: 2,
    width: 2,
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    height: 1,
    width: 3,
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    height: 2,
    width: 4,
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    height: 4,
    width: 4,
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const PULSAR: Pattern = Pattern {
    name: "pulsar",
    height: 13,
    width: 13,
    cells: &[
        // Top half
        (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
        (2, 0), (2, 5), (2, 7), (2, 12),
        (3, 0), (3, 5), (3, 7), (3, 12),
        (4, 0), (4, 5), (4, 7), (4, 12),
        (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
        // Bottom half (mirrored)
        (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
        (8, 0), (8, 5), (8, 7), (8, 12),
        (9, 0), (9, 5), (9, 7), (9, 12),
        (10, 0), (10, 5), (10, 7), (10, 12),
        (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
    ],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    height: 3,
    width: 3,
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "gosper-glider-gun",
    height: 9,
    width: 36,
    cells: &[
        (4, 0), (4, 1), (5, 0), (5, 1),
        (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
        (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
        (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
        (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
        (2, 34), (3, 34), (2, 35), (3, 35),
    ],
};

pub const PATTERNS: &[Pattern] = &[
    GLIDER,
    BLOCK,
    BLINKER,
    TOAD,
    BEACON,
    PULSAR,
    R_PENTOMINO,
    GOSPER_GLIDER_GUN,
];

impl Pattern {
    /// Look up a built-in pattern, ignoring case.
    pub fn by_name(name: &str) -> Result<&'static Pattern> {
        PATTERNS
            .iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownPattern(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Offsets of the ON cells inside the bounding box.
    pub fn live_cells(&self) -> &'static [(usize, usize)] {
        self.cells
    }

    /// Cell at `(row, col)` of the box. Anything outside the box is OFF.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        Cell::from(self.cells.contains(&(row, col)))
    }
}
