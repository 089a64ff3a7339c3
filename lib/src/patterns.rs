//! Seed patterns.

use crate::{codec::decode_onto, error::Error, grid::Grid};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A named pattern, in the text format of the [`codec`](crate::codec) module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// The name of the pattern, in lowercase.
    pub name: &'static str,

    /// The encoded pattern, with a margin of dead cells around it.
    pub text: &'static str,
}

/// Known patterns.
pub const PATTERNS: &[Pattern] = &[
    // The smallest spaceship.
    Pattern {
        name: "glider",
        text: "\
             0,0,0,0,0\n\
             0,0,0,1,0\n\
             0,1,0,1,0\n\
             0,0,1,1,0\n\
             0,0,0,0,0\n\
             ",
    },
    // A period 2 oscillator.
    Pattern {
        name: "blinker",
        text: "\
             0,0,0\n\
             0,1,0\n\
             0,1,0\n\
             0,1,0\n\
             0,0,0\n\
             ",
    },
    // A period 2 oscillator.
    Pattern {
        name: "toad",
        text: "\
             0,0,0,0\n\
             0,0,1,0\n\
             0,1,1,0\n\
             0,1,1,0\n\
             0,1,0,0\n\
             0,0,0,0\n\
             ",
    },
    // A period 2 oscillator.
    Pattern {
        name: "beacon",
        text: "\
             0,0,0,0,0,0\n\
             0,1,1,0,0,0\n\
             0,1,1,0,0,0\n\
             0,0,0,1,1,0\n\
             0,0,0,1,1,0\n\
             0,0,0,0,0,0\n\
             ",
    },
    // A still life.
    Pattern {
        name: "block",
        text: "\
             0,0,0,0\n\
             0,1,1,0\n\
             0,1,1,0\n\
             0,0,0,0\n\
             ",
    },
    // A methuselah that takes 1103 generations to stabilize.
    Pattern {
        name: "r-pentomino",
        text: "\
             0,0,0,0,0\n\
             0,0,1,0,0\n\
             0,1,1,1,0\n\
             0,1,0,0,0\n\
             0,0,0,0,0\n\
             ",
    },
    // A period 3 oscillator.
    Pattern {
        name: "pulsar",
        text: "\
             0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\n\
             0,0,0,1,1,1,0,0,0,1,1,1,0,0,0\n\
             0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\n\
             0,1,0,0,0,0,1,0,1,0,0,0,0,1,0\n\
             0,1,0,0,0,0,1,0,1,0,0,0,0,1,0\n\
             0,1,0,0,0,0,1,0,1,0,0,0,0,1,0\n\
             0,0,0,1,1,1,0,0,0,1,1,1,0,0,0\n\
             0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\n\
             0,0,0,1,1,1,0,0,0,1,1,1,0,0,0\n\
             0,1,0,0,0,0,1,0,1,0,0,0,0,1,0\n\
             0,1,0,0,0,0,1,0,1,0,0,0,0,1,0\n\
             0,1,0,0,0,0,1,0,1,0,0,0,0,1,0\n\
             0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\n\
             0,0,0,1,1,1,0,0,0,1,1,1,0,0,0\n\
             0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\n\
             ",
    },
];

impl Pattern {
    /// Finds a known pattern by its name, ignoring case.
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS
            .iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }
}

/// How to fill a new grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Seed {
    /// `random@<rate>`.
    ///
    /// Each cell is alive with the given probability.
    Random(f64),
    /// `blank`.
    ///
    /// All cells are dead.
    Blank,
    /// The name of a known pattern.
    ///
    /// The pattern is placed at `(0, 0)` of an otherwise blank grid.
    Pattern(&'static Pattern),
}

impl Seed {
    /// Fills a new grid of the given size.
    pub fn grid(&self, width: i32, height: i32) -> Result<Grid, Error> {
        match self {
            Seed::Random(rate) => Grid::random(width, height, *rate),
            Seed::Blank => Ok(Grid::blank(width, height)),
            Seed::Pattern(pattern) => {
                let mut grid = Grid::blank(width, height);
                decode_onto(&mut grid, pattern.text);
                Ok(grid)
            }
        }
    }
}

impl FromStr for Seed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(rate) = s.strip_prefix("random@") {
            let rate = rate
                .parse::<f64>()
                .map_err(|_| Error::UnknownSeed(s.to_string()))?;
            if !(0.0..=1.0).contains(&rate) {
                return Err(Error::InvalidRate(rate));
            }
            Ok(Seed::Random(rate))
        } else if s.eq_ignore_ascii_case("blank") {
            Ok(Seed::Blank)
        } else {
            Pattern::find(s)
                .map(Seed::Pattern)
                .ok_or_else(|| Error::UnknownSeed(s.to_string()))
        }
    }
}

impl Display for Seed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Random(rate) => write!(f, "random@{}", rate),
            Seed::Blank => f.write_str("blank"),
            Seed::Pattern(pattern) => f.write_str(pattern.name),
        }
    }
}
