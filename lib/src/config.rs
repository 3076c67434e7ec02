//! Simulation configuration.

use crate::{cells::Coord, error::Error, grid::Grid, pattern::import_pattern};
use educe::Educe;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How to fill the grid before a pattern is inserted.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Init {
    /// Every cell is dead.
    #[educe(Default)]
    Empty,

    /// Every cell is alive or dead with probability `1/2`.
    Random,
}

/// Simulation configuration.
///
/// The grid will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width.
    #[educe(Default = 64)]
    pub width: usize,

    /// Height.
    #[educe(Default = 64)]
    pub height: usize,

    /// How to fill the grid.
    pub init: Init,

    /// Seed for [`Init::Random`].
    ///
    /// `None` means a different grid every time.
    pub seed: Option<u64>,

    /// An RLE file to insert into the grid.
    pub pattern: Option<PathBuf>,

    /// Where the top-left cell of the pattern goes.
    #[educe(Default(expression = "Coord::new(1, 1)"))]
    pub anchor: Coord,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: usize, height: usize) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets how to fill the grid.
    pub fn set_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    /// Sets the random seed.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Sets the RLE file to insert.
    pub fn set_pattern<T: Into<Option<PathBuf>>>(mut self, pattern: T) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Sets where the top-left cell of the pattern goes.
    pub fn set_anchor<T: Into<Coord>>(mut self, anchor: T) -> Self {
        self.anchor = anchor.into();
        self
    }

    /// Creates a new grid from the configuration.
    ///
    /// Returns an error if the size is not positive,
    /// or the pattern cannot be read or does not fit.
    pub fn grid(&self) -> Result<Grid, Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::NonPositiveError);
        }
        let mut grid = match (self.init, self.seed) {
            (Init::Empty, _) => Grid::new(self.height, self.width),
            (Init::Random, None) => Grid::random(self.height, self.width),
            (Init::Random, Some(seed)) => {
                Grid::random_with(self.height, self.width, &mut StdRng::seed_from_u64(seed))
            }
        };
        if let Some(path) = &self.pattern {
            import_pattern(path, &mut grid, self.anchor)?;
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!((config.width, config.height), (64, 64));
        assert_eq!(config.init, Init::Empty);
        assert_eq!(config.anchor, Coord::new(1, 1));
        assert!(config.pattern.is_none());
    }

    #[test]
    fn zero_size() {
        assert!(matches!(Config::new(0, 5).grid(), Err(Error::NonPositiveError)));
        assert!(matches!(Config::new(5, 0).grid(), Err(Error::NonPositiveError)));
    }

    #[test]
    fn seeded_grids_agree() -> Result<(), Error> {
        let config = Config::new(30, 20).set_init(Init::Random).set_seed(7);
        let grid = config.grid()?;
        assert_eq!((grid.height(), grid.width()), (20, 30));
        assert_eq!(grid, config.grid()?);
        Ok(())
    }
}
