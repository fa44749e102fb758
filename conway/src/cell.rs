// cell.rs - Binary cell state

/// State of a single cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Off,
    On,
}

impl Cell {
    /// Display intensity of an OFF cell (first palette slot).
    pub const OFF_INTENSITY: u8 = 0;
    /// Display intensity of an ON cell (second palette slot).
    pub const ON_INTENSITY: u8 = 255;

    pub fn is_on(self) -> bool {
        self == Cell::On
    }

    /// Intensity a two-colour palette should use for this cell.
    pub fn intensity(self) -> u8 {
        match self {
            Cell::Off => Self::OFF_INTENSITY,
            Cell::On  => Self::ON_INTENSITY,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::On } else { Cell::Off }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_on()
    }
}
