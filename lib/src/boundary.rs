//! What lies beyond the edges of the grid.

use crate::{
    cells::{Coord, State, DEAD},
    grid::Grid,
};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Boundary conditions of the grid.
///
/// This is the only place where the edges of the grid are handled.
/// Counting neighbors and stepping never look at coordinates directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoundaryMode {
    /// `periodic`.
    ///
    /// Wraps around the edges, so that the grid becomes a torus.
    Periodic,
    /// `bounded`.
    ///
    /// Cells outside the grid are always dead.
    #[default]
    Bounded,
}

impl BoundaryMode {
    /// Gets the state to use for the cell at `coord` when counting neighbors.
    ///
    /// `coord` may be outside the grid, but by at most one cell on each axis.
    pub fn resolve(self, grid: &Grid, (x, y): Coord) -> State {
        match self {
            BoundaryMode::Periodic => {
                let x = wrap(x, grid.width());
                let y = wrap(y, grid.height());
                grid.get(x, y)
            }
            BoundaryMode::Bounded => grid.get_cell((x, y)).unwrap_or(DEAD),
        }
    }

    /// The other boundary mode.
    pub fn toggle(self) -> Self {
        match self {
            BoundaryMode::Periodic => BoundaryMode::Bounded,
            BoundaryMode::Bounded => BoundaryMode::Periodic,
        }
    }
}

/// Brings a coordinate that is off by at most one size back into `0..size`.
#[inline]
fn wrap(i: i32, size: i32) -> i32 {
    if i < 0 {
        i + size
    } else if i >= size {
        i - size
    } else {
        i
    }
}

impl FromStr for BoundaryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "periodic" | "p" => Ok(BoundaryMode::Periodic),
            "bounded" | "b" => Ok(BoundaryMode::Bounded),
            _ => Err(String::from("invalid boundary mode")),
        }
    }
}

impl Display for BoundaryMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoundaryMode::Periodic => "periodic",
            BoundaryMode::Bounded => "bounded",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::ALIVE;

    #[test]
    fn wrap_once() {
        assert_eq!(wrap(-1, 5), 4);
        assert_eq!(wrap(5, 5), 0);
        assert_eq!(wrap(3, 5), 3);
    }

    #[test]
    fn corner_neighbor() {
        let mut grid = Grid::blank(4, 3);
        grid.set(0, 0, ALIVE);
        assert_eq!(BoundaryMode::Periodic.resolve(&grid, (4, 3)), ALIVE);
        assert_eq!(BoundaryMode::Periodic.resolve(&grid, (-1, -1)), DEAD);
        assert_eq!(BoundaryMode::Bounded.resolve(&grid, (4, 3)), DEAD);
        assert_eq!(BoundaryMode::Bounded.resolve(&grid, (0, 0)), ALIVE);
    }

    #[test]
    fn parse() {
        assert_eq!("periodic".parse(), Ok(BoundaryMode::Periodic));
        assert_eq!("b".parse(), Ok(BoundaryMode::Bounded));
        assert!("torus".parse::<BoundaryMode>().is_err());
        assert_eq!(BoundaryMode::Periodic.to_string(), "periodic");
        assert_eq!(BoundaryMode::Periodic.toggle(), BoundaryMode::Bounded);
    }
}
