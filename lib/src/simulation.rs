//! Driving the simulation.

use crate::{
    boundary::BoundaryMode,
    cells::{Coord, State},
    codec::encode,
    config::Config,
    error::Error,
    grid::Grid,
    patterns::Seed,
    resize::resize,
    step::step,
};
use log::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simulation status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Waiting to start, or paused by the user.
    Paused,
    /// Stepping once per tick.
    Running,
    /// The grid has stopped changing. Ticks do nothing from now on.
    Converged,
    /// Stepping is suspended, and cells can be edited.
    Editing,
}

/// The state of a running simulation.
///
/// The front end calls [`tick`](Self::tick) once per frame,
/// and reads the grid back with [`grid`](Self::grid) to draw it.
#[derive(Clone, Debug)]
pub struct Simulation {
    /// Simulation configuration.
    ///
    /// The size here always matches the size of the grid.
    pub(crate) config: Config,

    /// The current generation.
    pub(crate) grid: Grid,

    /// Number of steps since the grid was seeded.
    pub(crate) generation: u64,

    /// Simulation status.
    pub(crate) status: Status,
}

impl Simulation {
    /// Creates a paused simulation from a configuration and a grid of the
    /// configured size.
    pub(crate) fn new(config: Config, grid: Grid) -> Self {
        debug_assert_eq!((grid.width(), grid.height()), (config.width, config.height));
        Simulation {
            config,
            grid,
            generation: 0,
            status: Status::Paused,
        }
    }

    /// Simulation configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of steps since the grid was seeded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Simulation status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The current boundary mode.
    pub fn boundary(&self) -> BoundaryMode {
        self.config.boundary
    }

    /// Starts stepping. Does nothing once the grid has converged
    /// or while editing.
    pub fn start(&mut self) {
        if self.status == Status::Paused {
            self.status = Status::Running;
        }
    }

    /// Stops stepping until [`start`](Self::start) is called.
    pub fn pause(&mut self) {
        if self.status == Status::Running {
            self.status = Status::Paused;
        }
    }

    /// Steps once if the simulation is running.
    ///
    /// If the grid does not change, the old grid is kept and the
    /// status becomes [`Converged`](Status::Converged).
    /// Only still lifes are detected; an oscillator runs forever.
    pub fn tick(&mut self) -> Status {
        if self.status != Status::Running {
            return self.status;
        }
        let (grid, changed) = step(&self.grid, self.config.boundary).into_parts();
        if changed {
            self.grid = grid;
            self.generation += 1;
            debug!(
                "Generation {}: {} living cells.",
                self.generation,
                self.grid.cell_count()
            );
        } else {
            self.status = Status::Converged;
            info!("Converged after {} generations.", self.generation);
        }
        self.status
    }

    /// Invalidates a converged state after the world has changed,
    /// since the grid may no longer be a still life.
    fn unconverge(&mut self) {
        if self.status == Status::Converged {
            self.status = Status::Paused;
        }
    }

    /// Sets the boundary mode used by the next step.
    pub fn set_boundary(&mut self, boundary: BoundaryMode) {
        if self.config.boundary != boundary {
            self.config.boundary = boundary;
            info!("Boundary mode set to {}.", boundary);
            self.unconverge();
        }
    }

    /// Switches between the two boundary modes.
    pub fn toggle_boundary(&mut self) -> BoundaryMode {
        self.set_boundary(self.config.boundary.toggle());
        self.config.boundary
    }

    /// Fills the grid again, keeping the current size.
    ///
    /// Leaves edit mode if it is on, without exporting anything.
    pub fn reseed(&mut self, seed: Seed) -> Result<(), Error> {
        self.grid = seed.grid(self.config.width, self.config.height)?;
        self.config.seed = seed.to_string();
        self.generation = 0;
        self.status = Status::Paused;
        info!("Reseeded with {}.", seed);
        Ok(())
    }

    /// Changes the size of the grid, keeping the cells where the old
    /// and the new size overlap.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), Error> {
        if width <= 0 || height <= 0 {
            return Err(Error::NonPositiveError);
        }
        self.grid = resize(&self.grid, width, height);
        self.config.width = width;
        self.config.height = height;
        self.unconverge();
        info!("Resized to {}x{}.", width, height);
        Ok(())
    }

    /// Enters edit mode with a blank grid of the current size.
    pub fn enter_edit(&mut self) {
        self.grid = Grid::blank(self.config.width, self.config.height);
        self.generation = 0;
        self.status = Status::Editing;
        info!("Entered edit mode.");
    }

    /// Flips the state of a cell in edit mode, and returns the new state.
    pub fn toggle_cell(&mut self, coord: Coord) -> Result<State, Error> {
        if self.status != Status::Editing {
            return Err(Error::NotEditing);
        }
        if !self.grid.contains(coord) {
            return Err(Error::SetCellError(coord));
        }
        Ok(self.grid.toggle(coord.0, coord.1))
    }

    /// Sets the state of a cell in edit mode.
    pub fn set_cell(&mut self, coord: Coord, state: State) -> Result<(), Error> {
        if self.status != Status::Editing {
            return Err(Error::NotEditing);
        }
        self.grid.set_cell(coord, state)
    }

    /// Leaves edit mode and returns the drawn grid in the text format
    /// of the [`codec`](crate::codec) module.
    ///
    /// The simulation is paused afterwards.
    pub fn leave_edit(&mut self) -> Result<String, Error> {
        if self.status != Status::Editing {
            return Err(Error::NotEditing);
        }
        self.status = Status::Paused;
        info!("Left edit mode with {} living cells.", self.grid.cell_count());
        Ok(encode(&self.grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::{ALIVE, DEAD};

    fn blinker() -> Result<Simulation, Error> {
        Config::new(5, 5)
            .set_boundary(BoundaryMode::Periodic)
            .set_seed("blinker")
            .simulation()
    }

    #[test]
    fn paused_until_started() -> Result<(), Error> {
        let mut sim = blinker()?;
        assert_eq!(sim.tick(), Status::Paused);
        assert_eq!(sim.generation(), 0);
        sim.start();
        assert_eq!(sim.tick(), Status::Running);
        assert_eq!(sim.generation(), 1);
        sim.pause();
        assert_eq!(sim.tick(), Status::Paused);
        Ok(())
    }

    #[test]
    fn stops_at_still_life() -> Result<(), Error> {
        let mut sim = Config::new(6, 6).set_seed("block").simulation()?;
        sim.start();
        assert_eq!(sim.tick(), Status::Converged);
        assert_eq!(sim.generation(), 0);
        sim.start();
        assert_eq!(sim.tick(), Status::Converged);
        sim.toggle_boundary();
        assert_eq!(sim.status(), Status::Paused);
        Ok(())
    }

    #[test]
    fn edit_mode() -> Result<(), Error> {
        let mut sim = blinker()?;
        assert_eq!(sim.toggle_cell((0, 0)), Err(Error::NotEditing));
        sim.enter_edit();
        assert!(sim.grid().is_empty());
        sim.start();
        assert_eq!(sim.tick(), Status::Editing);
        assert_eq!(sim.toggle_cell((0, 1)), Ok(ALIVE));
        assert_eq!(sim.toggle_cell((5, 0)), Err(Error::SetCellError((5, 0))));
        sim.set_cell((4, 4), ALIVE)?;
        sim.set_cell((4, 4), DEAD)?;
        let text = sim.leave_edit()?;
        assert_eq!(text, "0,1,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n");
        assert_eq!(sim.status(), Status::Paused);
        assert_eq!(sim.leave_edit(), Err(Error::NotEditing));
        Ok(())
    }

    #[test]
    fn resize_keeps_cells() -> Result<(), Error> {
        let mut sim = blinker()?;
        sim.resize(3, 8)?;
        assert_eq!(sim.config().width, 3);
        assert_eq!(sim.grid().height(), 8);
        assert_eq!(sim.grid().cell_count(), 2);
        assert_eq!(sim.resize(0, 8), Err(Error::NonPositiveError));
        Ok(())
    }

    #[test]
    fn reseed() -> Result<(), Error> {
        let mut sim = blinker()?;
        sim.start();
        sim.tick();
        sim.reseed(Seed::Blank)?;
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.status(), Status::Paused);
        assert_eq!(sim.config().seed, "blank");
        assert!(sim.grid().is_empty());
        Ok(())
    }
}
