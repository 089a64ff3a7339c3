//! A simulator for Conway's Game of Life on a finite grid.
//!
//! The grid is stepped one generation at a time. Each step builds a new
//! [`Grid`] from the old one, and tells whether anything has changed,
//! so that the driver can stop once the grid reaches a still life.
//!
//! # Example
//!
//! ```rust
//! use lifesim_lib::{step, BoundaryMode, Grid, ALIVE};
//!
//! // A blinker.
//! let mut grid = Grid::blank(5, 5);
//! for x in 1..4 {
//!     grid.set(x, 2, ALIVE);
//! }
//!
//! let next = step(&grid, BoundaryMode::Periodic);
//! assert!(next.changed);
//! assert_eq!(next.grid.get(2, 1), ALIVE);
//! ```

mod boundary;
mod cells;
pub mod codec;
mod config;
mod error;
mod grid;
mod patterns;
mod resize;
mod rule;
#[cfg(feature = "serde")]
mod save;
mod simulation;
mod step;

pub use boundary::BoundaryMode;
pub use cells::{Coord, State, ALIVE, DEAD};
pub use codec::{decode, decode_onto, encode};
pub use config::{Config, RESIZE_PRESETS};
pub use error::Error;
pub use grid::Grid;
pub use patterns::{Pattern, Seed, PATTERNS};
pub use resize::resize;
pub use rule::next_state;
#[cfg(feature = "serde")]
pub use save::SimulationSer;
pub use simulation::{Simulation, Status};
pub use step::{count_neighbors, step, Step};
