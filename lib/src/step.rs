//! Evolving the grid by one generation.

use crate::{
    boundary::BoundaryMode,
    cells::{Coord, NEIGHBOR_OFFSETS},
    grid::Grid,
    rule::next_state,
};

/// The result of a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// The next generation.
    pub grid: Grid,

    /// Whether any cell differs from the previous generation.
    ///
    /// `false` means that the grid has reached a still life.
    /// Oscillators are not detected: they always report `true`.
    pub changed: bool,
}

impl Step {
    /// Splits the result into the next generation and the `changed` flag.
    pub fn into_parts(self) -> (Grid, bool) {
        (self.grid, self.changed)
    }
}

/// Number of living cells among the eight neighbors of the cell at `coord`.
pub fn count_neighbors(grid: &Grid, boundary: BoundaryMode, (x, y): Coord) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|(dx, dy)| boundary.resolve(grid, (x + dx, y + dy)).is_alive())
        .count() as u8
}

/// Computes the next generation of the grid.
///
/// Every neighbor count reads the previous generation only.
/// The returned grid is a new one; `grid` is left unchanged.
pub fn step(grid: &Grid, boundary: BoundaryMode) -> Step {
    let mut next = Grid::blank(grid.width(), grid.height());
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let count = count_neighbors(grid, boundary, (x, y));
            next.set(x, y, next_state(grid.get(x, y), count));
        }
    }
    let changed = grid.diff(&next);
    Step {
        grid: next,
        changed,
    }
}
