//! Move legality.
//!
//! Everything here is a pure function of a [`Board`]: a capture scan walks
//! outward from a candidate cell along one [`Direction`], and a direction is
//! legal when the walk crosses one or more opposing pieces and lands on one
//! of the mover's own. The same walk drives flipping in [`crate::Game`].

use crate::board::{Board, Cell};
use crate::direction::{Direction, DirectionSet};
use crate::game::Color;
use crate::location::Location;

/// Walk from `origin` along `direction` and return the opposing run that a
/// placement at `origin` would capture: the location of the first opposing
/// piece and the length of the run. Returns None unless the run is closed by
/// one of `color`'s own pieces.
pub fn capture_run(
    board: &Board,
    color: Color,
    origin: Location,
    direction: Direction,
) -> Option<(Location, usize)> {
    let own = Cell::from(color);
    let opposing = Cell::from(!color);

    let first = origin.step(direction)?;
    let mut cursor = first;
    let mut run = 0;

    while board.get(cursor)? == opposing {
        run += 1;
        cursor = cursor.step(direction)?;
    }

    // Border and empty cells both end the scan without a capture.
    if run > 0 && board.get(cursor)? == own {
        Some((first, run))
    } else {
        None
    }
}

/// The directions along which `color` playing at `loc` would capture.
///
/// Occupancy of `loc` itself is not checked: callers must test for an empty
/// cell first. Safe to call with any location, including off-grid ones.
pub fn legal_directions(board: &Board, color: Color, loc: Location) -> DirectionSet {
    Direction::ALL
        .into_iter()
        .filter(|&direction| capture_run(board, color, loc, direction).is_some())
        .collect()
}

/// Returns whether `color` has at least one legal placement.
pub fn legal_move_exists(board: &Board, color: Color) -> bool {
    board
        .empty_cells()
        .any(|loc| !legal_directions(board, color, loc).is_empty())
}

/// Every legal placement for `color`, in row-major order.
pub fn available_positions(board: &Board, color: Color) -> Vec<Location> {
    board
        .empty_cells()
        .filter(|&loc| !legal_directions(board, color, loc).is_empty())
        .collect()
}

/// Returns whether neither color can place a piece.
pub fn is_terminal(board: &Board) -> bool {
    !legal_move_exists(board, Color::Black) && !legal_move_exists(board, Color::White)
}
