//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Unable to set cell at {0:?}.
    SetCellError(Coord),
    /// Width / height should be positive.
    NonPositiveError,
    /// Invalid rate: {0}. The rate of living cells should be between 0 and 1.
    InvalidRate(f64),
    /// Unknown seed: {0:?}.
    UnknownSeed(String),
    /// Cells can only be edited in edit mode.
    NotEditing,
}
