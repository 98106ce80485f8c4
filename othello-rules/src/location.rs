//! Code for working with [`Location`]s on the Othello board.

use crate::direction::Direction;
use crate::{EDGE_LENGTH, GRID_SIZE};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};

/// A cell coordinate on the backing grid, as (row, column).
///
/// Rows and columns 1 through 8 are the playable interior; 0 and 9 are the
/// border frame. Any coordinate can be represented, so that out-of-range
/// input from a caller can be reported rather than rejected at construction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns whether this location is a playable cell.
    #[inline]
    pub fn is_interior(self) -> bool {
        (1..=EDGE_LENGTH).contains(&self.row) && (1..=EDGE_LENGTH).contains(&self.col)
    }

    /// Returns whether this location lies on the backing grid, border included.
    #[inline]
    pub fn is_on_grid(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Returns whether this location is part of the border frame.
    #[inline]
    pub fn is_border(self) -> bool {
        self.is_on_grid() && !self.is_interior()
    }

    /// Take one step in `direction`.
    /// Returns None if the step would leave the backing grid.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (row_delta, col_delta) = direction.offset();
        let next = Self {
            row: self.row.checked_add_signed(row_delta)?,
            col: self.col.checked_add_signed(col_delta)?,
        };

        if next.is_on_grid() {
            Some(next)
        } else {
            None
        }
    }

    /// Iterate every playable location in row-major order.
    pub fn interior() -> impl Iterator<Item = Location> {
        (1..=EDGE_LENGTH).flat_map(|row| (1..=EDGE_LENGTH).map(move |col| Location::new(row, col)))
    }
}

impl From<(usize, usize)> for Location {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Location> for (usize, usize) {
    fn from(loc: Location) -> Self {
        (loc.row, loc.col)
    }
}

/// Formats as a `(row, col)` pair.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a playable [`Location`] from algebraic notation ("D3"): a column
/// letter A-H followed by a row digit 1-8.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)? + 1;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if !(1..=EDGE_LENGTH).contains(&row) || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Ok(Self::new(row, col))
    }
}

/// Format a list of locations as `[(r, c), (r, c)]`.
pub(crate) fn format_locations(locations: &[Location], f: &mut Formatter<'_>) -> fmt::Result {
    let string = locations
        .iter()
        .map(|loc| loc.to_string())
        .collect::<Vec<String>>()
        .join(", ");

    f.write_fmt(format_args!("[{}]", string))
}
