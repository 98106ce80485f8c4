//! The eight compass [`Direction`]s a capture can run along.

use derive_more::{BitAnd, BitOr, BitOrAssign, Display, From, Into};
use std::fmt;

/// One of the eight compass directions, as a unit step on the grid.
/// North is toward row 0; West is toward column 0.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display)]
pub enum Direction {
    #[display(fmt = "north")]
    North,
    #[display(fmt = "south")]
    South,
    #[display(fmt = "east")]
    East,
    #[display(fmt = "west")]
    West,
    #[display(fmt = "northeast")]
    NorthEast,
    #[display(fmt = "northwest")]
    NorthWest,
    #[display(fmt = "southeast")]
    SouthEast,
    #[display(fmt = "southwest")]
    SouthWest,
}

impl Direction {
    /// Every direction, in the order scans visit them.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// The (row, column) delta of a single step.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of directions packed into one bit per direction.
/// Can be iterated to retrieve the directions, in [`Direction::ALL`] order.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, From, Into, BitAnd, BitOr, BitOrAssign,
)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: Self = Self(0);

    /// Returns whether no direction is in the set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns whether `direction` is in the set.
    #[inline]
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        Self(direction.bit())
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

impl ExactSizeIterator for DirectionSet {
    fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl Iterator for DirectionSet {
    type Item = Direction;

    fn next(&mut self) -> Option<Direction> {
        if self.0 == 0 {
            return None;
        }

        let next = Direction::ALL[self.0.trailing_zeros() as usize];
        self.0 ^= next.bit();
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|direction| direction.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
