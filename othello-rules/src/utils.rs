//! Miscellaneous project utilities.

use crate::GRID_SIZE;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format the symbols of the backing grid, one row per line, separated by spaces.
/// `symbol_iter` must yield exactly `GRID_SIZE * GRID_SIZE` items.
pub fn format_grid<T: Iterator<Item = char>>(mut symbol_iter: T, f: &mut Formatter) -> fmt::Result {
    for row in 0..GRID_SIZE {
        if row > 0 {
            writeln!(f)?;
        }

        for col in 0..GRID_SIZE {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", symbol_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match symbol_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
