//! Simulation configuration.

use crate::{boundary::BoundaryMode, error::Error, patterns::Seed, simulation::Simulation};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sizes offered when resizing the grid, as `(width, height)`.
pub const RESIZE_PRESETS: &[(i32, i32)] = &[(10, 10), (30, 30), (50, 50), (100, 100)];

/// Simulation configuration.
///
/// The simulation will be generated from this configuration.
/// It is owned by whoever drives the simulation and passed along,
/// so that nothing about the world is kept in global state.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width.
    #[educe(Default = 50)]
    pub width: i32,

    /// Height.
    #[educe(Default = 50)]
    pub height: i32,

    /// What lies beyond the edges of the grid.
    pub boundary: BoundaryMode,

    /// How to fill the grid at the start.
    ///
    /// `random@<rate>`, `blank`, or the name of a known pattern.
    /// See [`Seed`].
    #[educe(Default = "random@0.3")]
    pub seed: String,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: i32, height: i32) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the boundary mode.
    pub fn set_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets the seed.
    pub fn set_seed<S: ToString>(mut self, seed: S) -> Self {
        self.seed = seed.to_string();
        self
    }

    /// Parses the seed.
    pub fn seed(&self) -> Result<Seed, Error> {
        self.seed.parse()
    }

    /// Checks the size and the seed.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::NonPositiveError);
        }
        self.seed()?;
        Ok(())
    }

    /// Creates a new simulation from the configuration.
    pub fn simulation(&self) -> Result<Simulation, Error> {
        self.validate()?;
        let grid = self.seed()?.grid(self.width, self.height)?;
        Ok(Simulation::new(self.clone(), grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default() {
        let config = Config::default();
        assert_eq!((config.width, config.height), (50, 50));
        assert_eq!(config.boundary, BoundaryMode::Bounded);
        assert_eq!(config.seed(), Ok(Seed::Random(0.3)));
    }

    #[test]
    fn non_positive() {
        assert_eq!(Config::new(0, 5).validate(), Err(Error::NonPositiveError));
        assert_eq!(Config::new(5, -1).validate(), Err(Error::NonPositiveError));
    }

    #[test]
    fn bad_seed() {
        let config = Config::new(5, 5).set_seed("spaceship");
        assert_eq!(
            config.simulation().err(),
            Some(Error::UnknownSeed(String::from("spaceship")))
        );
    }
}
