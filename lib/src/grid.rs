//! The grid.

use crate::{
    cells::{Coord, State, DEAD},
    error::Error,
};
use rand::{thread_rng, Rng};
use std::fmt::{self, Display, Formatter};

/// A rectangular grid of cells.
///
/// The grid has `width` rows indexed by the x-coordinate,
/// each of which holds `height` cells indexed by the y-coordinate.
///
/// In the simulation a grid is a snapshot of one generation:
/// stepping produces a new grid instead of changing this one.
/// The only in-place changes are [`set`](Self::set) and
/// [`toggle`](Self::toggle), which are meant for edit mode.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Width.
    width: i32,

    /// Height.
    height: i32,

    /// All the cells, row by row.
    ///
    /// The cell at `(x, y)` is at index `x * height + y`.
    cells: Vec<State>,
}

impl Grid {
    /// Creates a grid of the given size where every cell is dead.
    ///
    /// The width and the height are assumed to be positive.
    pub fn blank(width: i32, height: i32) -> Self {
        let size = width.max(0) as usize * height.max(0) as usize;
        Grid {
            width,
            height,
            cells: vec![DEAD; size],
        }
    }

    /// Creates a random grid where each cell is alive with probability `rate`.
    pub fn random(width: i32, height: i32, rate: f64) -> Result<Self, Error> {
        Self::random_with_rng(width, height, rate, &mut thread_rng())
    }

    /// Same as [`random`](Self::random), with a given random number generator.
    pub fn random_with_rng<G: Rng>(
        width: i32,
        height: i32,
        rate: f64,
        rng: &mut G,
    ) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(Error::InvalidRate(rate));
        }
        let mut grid = Self::blank(width, height);
        for cell in grid.cells.iter_mut() {
            *cell = State::from(rng.gen_bool(rate));
        }
        Ok(grid)
    }

    /// Creates a grid from its rows.
    ///
    /// `rows[x][y]` is the cell at `(x, y)`.
    /// Rows shorter than the longest one are filled up with dead cells.
    pub fn from_rows<R: AsRef<[State]>>(rows: &[R]) -> Self {
        let width = rows.len() as i32;
        let height = rows.iter().map(|row| row.as_ref().len()).max().unwrap_or(0) as i32;
        let mut grid = Self::blank(width, height);
        grid.apply_rows(rows);
        grid
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the coordinates are inside the grid.
    #[inline]
    pub fn contains(&self, (x, y): Coord) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// Gets the state of the cell at `(x, y)`.
    ///
    /// The coordinates must be inside the grid. Whatever lies outside
    /// is decided by [`BoundaryMode`](crate::BoundaryMode).
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> State {
        debug_assert!(self.contains((x, y)), "({}, {}) is outside the grid", x, y);
        self.cells[(x * self.height + y) as usize]
    }

    /// Gets the state of a cell. Returns `None` if there is no such cell.
    pub fn get_cell(&self, coord: Coord) -> Option<State> {
        if self.contains(coord) {
            Some(self.get(coord.0, coord.1))
        } else {
            None
        }
    }

    /// Sets the state of the cell at `(x, y)`.
    ///
    /// The coordinates must be inside the grid.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, state: State) {
        debug_assert!(self.contains((x, y)), "({}, {}) is outside the grid", x, y);
        self.cells[(x * self.height + y) as usize] = state;
    }

    /// Sets the state of a cell. Returns an error if there is no such cell.
    pub fn set_cell(&mut self, coord: Coord, state: State) -> Result<(), Error> {
        if !self.contains(coord) {
            return Err(Error::SetCellError(coord));
        }
        self.set(coord.0, coord.1, state);
        Ok(())
    }

    /// Flips the state of the cell at `(x, y)` and returns the new state.
    pub fn toggle(&mut self, x: i32, y: i32) -> State {
        let state = !self.get(x, y);
        self.set(x, y, state);
        state
    }

    /// Number of living cells.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    /// Whether all cells are dead.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&state| state == DEAD)
    }

    /// Iterates over the rows, in the order of the x-coordinate.
    pub fn rows(&self) -> impl Iterator<Item = &[State]> {
        self.cells.chunks(self.height.max(1) as usize)
    }

    /// Writes the given rows into the grid, starting from `(0, 0)`.
    ///
    /// `rows[x][y]` goes to `(x, y)`. Anything that does not fit is
    /// clipped, and cells that are not covered keep their states.
    pub fn apply_rows<R: AsRef<[State]>>(&mut self, rows: &[R]) {
        for (x, row) in rows.iter().take(self.width.max(0) as usize).enumerate() {
            for (y, &state) in row.as_ref().iter().take(self.height.max(0) as usize).enumerate() {
                self.set(x as i32, y as i32, state);
            }
        }
    }

    /// Whether any cell differs between the two grids.
    ///
    /// # Panics
    ///
    /// Panics if the grids have different sizes.
    pub fn diff(&self, other: &Grid) -> bool {
        assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "comparing grids of different sizes"
        );
        self.cells != other.cells
    }

    /// Displays the grid in [Plaintext](https://conwaylife.com/wiki/Plaintext)
    /// format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`.
    ///
    /// Each line is one y-coordinate.
    pub fn plaintext(&self) -> String {
        self.to_string()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                match self.get(x, y) {
                    State::Alive => f.write_str("o")?,
                    State::Dead => f.write_str(".")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::ALIVE;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn blank_is_empty() {
        let grid = Grid::blank(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 4);
        assert!(grid.rows().all(|row| row.len() == 3));
    }

    #[test]
    fn set_and_toggle() {
        let mut grid = Grid::blank(3, 3);
        grid.set(1, 2, ALIVE);
        assert_eq!(grid.get(1, 2), ALIVE);
        assert_eq!(grid.get(2, 1), DEAD);
        assert_eq!(grid.toggle(1, 2), DEAD);
        assert_eq!(grid.toggle(0, 0), ALIVE);
        assert_eq!(grid.cell_count(), 1);
    }

    #[test]
    fn set_cell_out_of_range() {
        let mut grid = Grid::blank(3, 3);
        assert_eq!(grid.set_cell((3, 0), ALIVE), Err(Error::SetCellError((3, 0))));
        assert_eq!(grid.set_cell((0, -1), ALIVE), Err(Error::SetCellError((0, -1))));
        assert_eq!(grid.get_cell((-1, 0)), None);
    }

    #[test]
    fn random_rate() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(Grid::random_with_rng(8, 8, 0.0, &mut rng)?.is_empty());
        assert_eq!(Grid::random_with_rng(8, 8, 1.0, &mut rng)?.cell_count(), 64);
        assert_eq!(
            Grid::random_with_rng(8, 8, 1.5, &mut rng),
            Err(Error::InvalidRate(1.5))
        );
        assert!(Grid::random(8, 8, f64::NAN).is_err());
        Ok(())
    }

    #[test]
    fn apply_rows_keeps_uncovered() {
        let mut grid = Grid::blank(3, 3);
        grid.set(2, 2, ALIVE);
        grid.apply_rows(&[vec![ALIVE, DEAD, ALIVE, ALIVE], vec![ALIVE]]);
        assert_eq!(
            grid,
            Grid::from_rows(&[[ALIVE, DEAD, ALIVE], [ALIVE, DEAD, DEAD], [DEAD, DEAD, ALIVE]])
        );
    }

    #[test]
    fn from_ragged_rows() {
        let grid = Grid::from_rows(&[vec![ALIVE], vec![DEAD, DEAD, ALIVE]]);
        assert_eq!((grid.width(), grid.height()), (2, 3));
        assert_eq!(grid.get(0, 1), DEAD);
        assert_eq!(grid.get(1, 2), ALIVE);
    }

    #[test]
    fn plaintext() {
        let grid = Grid::from_rows(&[[ALIVE, ALIVE], [DEAD, ALIVE], [DEAD, DEAD]]);
        assert_eq!(grid.plaintext(), "o..\noo.\n");
    }

    #[test]
    #[should_panic]
    fn diff_size_mismatch() {
        Grid::blank(2, 2).diff(&Grid::blank(3, 2));
    }
}
