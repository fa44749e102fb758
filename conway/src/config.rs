// config.rs - Simulation settings supplied by whoever drives the engine

use std::str::FromStr;
use std::time::Duration;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::seed::{DEFAULT_PROBABILITY, pattern_grid, random_grid};
use crate::{Error, Grid, Pattern, Result};

/// How the initial grid is filled.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedMode {
    /// Uniform random fill using `SimConfig::probability`.
    Random,
    /// A single built-in pattern stamped into an empty grid.
    Pattern { name: String, row: usize, col: usize },
}

impl SeedMode {
    /// A glider in the top-left corner.
    pub fn glider() -> Self {
        SeedMode::Pattern {
            name: "glider".to_string(),
            row: 1,
            col: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub grid_size: usize,
    pub probability: f64,
    pub seed: SeedMode,
    /// Time between generations.
    pub interval: Duration,
    /// Stop after this many generations (`None` runs until a cycle is found).
    pub generations: Option<u64>,
    /// Seed for the random fill. Without it every run differs.
    pub rng_seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size: 100,
            probability: DEFAULT_PROBABILITY,
            seed: SeedMode::Random,
            interval: Duration::from_millis(50),
            generations: None,
            rng_seed: None,
        }
    }
}

impl SimConfig {
    pub const GRID_SIZE: &'static str = "CONWAY_GRID_SIZE";
    pub const PROBABILITY: &'static str = "CONWAY_PROBABILITY";
    pub const PATTERN: &'static str = "CONWAY_PATTERN";
    pub const PATTERN_ROW: &'static str = "CONWAY_PATTERN_ROW";
    pub const PATTERN_COL: &'static str = "CONWAY_PATTERN_COL";
    pub const INTERVAL_MS: &'static str = "CONWAY_INTERVAL_MS";
    pub const GENERATIONS: &'static str = "CONWAY_GENERATIONS";
    pub const RNG_SEED: &'static str = "CONWAY_RNG_SEED";

    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Build a config from `(key, value)` pairs. Unknown keys are ignored;
    /// missing keys keep their defaults.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        let mut pattern = None;
        let mut pattern_row = 1;
        let mut pattern_col = 1;

        for (key, value) in vars {
            let value = value.as_ref();
            match key.as_ref() {
                Self::GRID_SIZE => config.grid_size = parse(Self::GRID_SIZE, value)?,
                Self::PROBABILITY => config.probability = parse(Self::PROBABILITY, value)?,
                Self::PATTERN => pattern = Some(value.to_string()),
                Self::PATTERN_ROW => pattern_row = parse(Self::PATTERN_ROW, value)?,
                Self::PATTERN_COL => pattern_col = parse(Self::PATTERN_COL, value)?,
                Self::INTERVAL_MS => {
                    config.interval = Duration::from_millis(parse(Self::INTERVAL_MS, value)?)
                }
                Self::GENERATIONS => config.generations = Some(parse(Self::GENERATIONS, value)?),
                Self::RNG_SEED => config.rng_seed = Some(parse(Self::RNG_SEED, value)?),
                _ => {}
            }
        }

        if let Some(name) = pattern {
            config.seed = SeedMode::Pattern {
                name,
                row: pattern_row,
                col: pattern_col,
            };
        }
        config.validate()?;
        debug!("loaded {config:?}");
        Ok(config)
    }

    /// Check every value without building anything.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size < Grid::MIN_SIZE {
            return Err(Error::InvalidSize {
                size: self.grid_size,
                min: Grid::MIN_SIZE,
            });
        }
        if self.grid_size > Grid::MAX_SIZE {
            return Err(Error::TooLarge {
                size: self.grid_size,
                max: Grid::MAX_SIZE,
            });
        }
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(Error::InvalidProbability(self.probability));
        }
        if let SeedMode::Pattern { name, .. } = &self.seed {
            Pattern::by_name(name)?;
        }
        Ok(())
    }

    /// Build the seeded generation-zero grid.
    pub fn build_grid(&self) -> Result<Grid> {
        match &self.seed {
            SeedMode::Random => {
                let mut rng = match self.rng_seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                random_grid(self.grid_size, self.probability, &mut rng)
            }
            SeedMode::Pattern { name, row, col } => {
                let pattern = Pattern::by_name(name)?;
                pattern_grid(self.grid_size, pattern, *row, *col)
            }
        }
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::InvalidConfig {
        key,
        value: value.to_string(),
    })
}
