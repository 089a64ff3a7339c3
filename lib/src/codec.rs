//! Reading and writing grids as text.
//!
//! A pattern is written row by row, in the order of the x-coordinate.
//! Each row is a list of `1` (living) and `0` (dead) separated by
//! [`COLUMN_DELIMITER`], and each row ends with [`ROW_DELIMITER`]:
//!
//! ```plaintext
//! 1,1,0
//! 1,0,0
//! 0,0,0
//! ```

use crate::{
    cells::{State, ALIVE, DEAD},
    grid::Grid,
};

/// Separates the rows.
pub const ROW_DELIMITER: char = '\n';

/// Separates the cells in a row.
pub const COLUMN_DELIMITER: char = ',';

/// Reads the rows of a pattern.
///
/// `1` is a living cell. Any other token, including an empty one,
/// is read as a dead cell, so decoding never fails. Whitespace around
/// a token is ignored, which also accepts `\r\n` line endings.
///
/// A trailing [`ROW_DELIMITER`] does not add an empty row.
pub fn decode(text: &str) -> Vec<Vec<State>> {
    let text = text.strip_suffix(ROW_DELIMITER).unwrap_or(text);
    text.split(ROW_DELIMITER)
        .map(|row| {
            row.split(COLUMN_DELIMITER)
                .map(|token| match token.trim() {
                    "1" => ALIVE,
                    _ => DEAD,
                })
                .collect()
        })
        .collect()
}

/// Reads a pattern into the grid, starting from `(0, 0)`.
///
/// Cells not covered by the pattern keep their states,
/// and the part of the pattern that does not fit is dropped.
pub fn decode_onto(grid: &mut Grid, text: &str) {
    let rows = decode(text);
    grid.apply_rows(rows.as_slice());
}

/// Writes the grid as a pattern, with a [`ROW_DELIMITER`] after every row.
pub fn encode(grid: &Grid) -> String {
    let mut text = String::with_capacity((grid.width() * grid.height() * 2).max(0) as usize);
    for row in grid.rows() {
        for (y, state) in row.iter().enumerate() {
            if y > 0 {
                text.push(COLUMN_DELIMITER);
            }
            text.push(if state.is_alive() { '1' } else { '0' });
        }
        text.push(ROW_DELIMITER);
    }
    text
}
