//! `othello-rules` is the rules engine for two-player Othello, played on an
//! 8x8 board padded with a one-cell sentinel border.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`Board`] holds the raw 10x10 grid of [`Cell`]s. The border frame is
//!    never writable, so directional scans stop on it without bounds checks.
//!  - [`rules`] contains the pure move-legality logic: which [`Direction`]s
//!    a placement captures along, and which locations are legal for a color.
//!  - [`Game`] is the controller. It owns the board, accepts moves through
//!    [`Game::attempt_move`], flips captured pieces, and detects the end of
//!    the game.

pub mod rules;
pub mod test_utils;

mod board;
mod direction;
mod game;
mod location;
mod utils;

pub use board::*;
pub use direction::*;
pub use game::*;
pub use location::*;

/// The number of playable spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of cells on one edge of the backing grid, border included.
pub const GRID_SIZE: usize = EDGE_LENGTH + 2;

/// The number of playable spaces on an Othello board.
pub const NUM_SPACES: usize = EDGE_LENGTH * EDGE_LENGTH;
