//! Changing the size of the grid.

use crate::grid::Grid;

/// Creates a grid of the new size with the same content as `source`
/// where the two overlap. Cells outside the overlap are dead.
///
/// The new width and height are assumed to be positive;
/// [`Simulation::resize`](crate::Simulation::resize) checks them.
pub fn resize(source: &Grid, width: i32, height: i32) -> Grid {
    let mut grid = Grid::blank(width, height);
    for x in 0..source.width().min(width) {
        for y in 0..source.height().min(height) {
            grid.set(x, y, source.get(x, y));
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::{ALIVE, DEAD};

    #[test]
    fn mixed_resize() {
        let grid = Grid::from_rows(&[[ALIVE, DEAD, ALIVE], [DEAD, ALIVE, ALIVE]]);
        let wide = resize(&grid, 4, 2);
        assert_eq!(
            wide,
            Grid::from_rows(&[[ALIVE, DEAD], [DEAD, ALIVE], [DEAD, DEAD], [DEAD, DEAD]])
        );
    }
}
