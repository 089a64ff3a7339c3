//! Saves the simulation.

use crate::{
    codec::{decode_onto, encode},
    config::Config,
    error::Error,
    grid::Grid,
    simulation::{Simulation, Status},
};
use serde::{Deserialize, Serialize};

/// A representation of the simulation which can be easily serialized.
///
/// Where it is stored is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSer {
    /// Simulation configuration.
    config: Config,

    /// Number of steps since the grid was seeded.
    generation: u64,

    /// Simulation status.
    status: Status,

    /// The current generation, in the text format of the
    /// [`codec`](crate::codec) module.
    cells: String,
}

impl SimulationSer {
    /// Restores the simulation from the `SimulationSer`.
    ///
    /// A running simulation is restored as paused.
    pub fn simulation(&self) -> Result<Simulation, Error> {
        if self.config.width <= 0 || self.config.height <= 0 {
            return Err(Error::NonPositiveError);
        }
        let mut grid = Grid::blank(self.config.width, self.config.height);
        decode_onto(&mut grid, &self.cells);
        let mut simulation = Simulation::new(self.config.clone(), grid);
        simulation.generation = self.generation;
        simulation.status = match self.status {
            Status::Running => Status::Paused,
            status => status,
        };
        Ok(simulation)
    }
}

impl Simulation {
    /// Saves the simulation as a `SimulationSer`.
    pub fn ser(&self) -> SimulationSer {
        SimulationSer {
            config: self.config.clone(),
            generation: self.generation,
            status: self.status,
            cells: encode(&self.grid),
        }
    }
}
