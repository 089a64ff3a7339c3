//! Cells in the cellular automaton.

use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// A dead cell.
    #[default]
    Dead,
    /// A living cell.
    Alive,
}

/// The Dead state.
pub const DEAD: State = State::Dead;
/// The Alive state.
pub const ALIVE: State = State::Alive;

impl State {
    /// Whether the cell is alive.
    #[inline]
    pub fn is_alive(self) -> bool {
        self == ALIVE
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Alive => State::Dead,
            State::Dead => State::Alive,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            ALIVE
        } else {
            DEAD
        }
    }
}

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`, both 0-indexed.
///
/// Signed, so that a neighbor of a cell on the edge can be described
/// before the boundary mode decides what it refers to.
pub type Coord = (i32, i32);

/// The eight neighbors of a cell, as offsets from its coordinates.
pub(crate) const NEIGHBOR_OFFSETS: [Coord; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_flips() {
        assert_eq!(!ALIVE, DEAD);
        assert_eq!(!DEAD, ALIVE);
    }

    #[test]
    fn offsets_skip_center() {
        assert!(!NEIGHBOR_OFFSETS.contains(&(0, 0)));
    }
}
