//! The rule of Conway's Game of Life.

use crate::cells::{State, ALIVE, DEAD};

/// The next state of a cell, given its current state and the number of
/// living cells among its eight neighbors.
///
/// B3/S23: a cell with three living neighbors is alive in the next
/// generation, a cell with two keeps its state, and any other cell dies.
#[inline]
pub fn next_state(state: State, living_neighbors: u8) -> State {
    match living_neighbors {
        3 => ALIVE,
        2 => state,
        _ => DEAD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_and_survival() {
        assert_eq!(next_state(DEAD, 3), ALIVE);
        assert_eq!(next_state(ALIVE, 3), ALIVE);
    }

    #[test]
    fn unchanged_on_two() {
        assert_eq!(next_state(DEAD, 2), DEAD);
        assert_eq!(next_state(ALIVE, 2), ALIVE);
    }

    #[test]
    fn death() {
        for count in [0, 1, 4, 5, 6, 7, 8] {
            assert_eq!(next_state(ALIVE, count), DEAD);
            assert_eq!(next_state(DEAD, count), DEAD);
        }
    }
}
