//! Implements game-level Othello logic.
//!
//! [`Game`] is the only writer of its [`Board`]: every placement goes through
//! [`Game::attempt_move`], which checks legality with [`crate::rules`] before
//! touching a cell.

use crate::board::{Board, Cell};
use crate::direction::DirectionSet;
use crate::location::{self, Location};
use crate::rules;
use derive_more::{Display, Error};
use std::{fmt, iter};
use tracing::{debug, trace};

/// The color of a piece, and of the player who moves it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display)]
pub enum Color {
    #[display(fmt = "black")]
    Black,
    #[display(fmt = "white")]
    White,
}

impl Default for Color {
    /// Gets the color that moves first (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the opposing color.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid color string")]
pub struct ParseColorError;

/// Parse "black" or "white", ignoring case.
impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            _ => Err(ParseColorError),
        }
    }
}

/// A named participant playing one color.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Player {
    pub name: String,
    pub color: Color,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Piece counts for both colors.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Display)]
#[display(fmt = "black {} - white {}", black, white)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

/// Why a move was refused. The game carries on unchanged after either.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum RejectReason {
    /// The coordinate lies outside the 8x8 playing area.
    #[display(fmt = "location is outside the board")]
    OutOfBounds,
    /// The cell is occupied, or the placement captures nothing.
    #[display(fmt = "move captures no pieces")]
    NoCapture,
}

/// The result of a finished game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WinnerSummary {
    Tie,
    /// `name` is None when no player registered the winning color.
    Win { color: Color, name: Option<String> },
}

impl fmt::Display for WinnerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinnerSummary::Tie => f.write_str("It's a tie"),
            WinnerSummary::Win {
                color,
                name: Some(name),
            } => write!(f, "Winner is {} player: {}", color, name),
            WinnerSummary::Win { color, name: None } => {
                write!(f, "Winner is {} player: (unregistered)", color)
            }
        }
    }
}

/// What [`Game::attempt_move`] did.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The move was played; holds the board after all captures.
    Applied(Board),
    /// The move was refused. `suggestions` lists the mover's legal placements
    /// on the current board.
    Rejected {
        reason: RejectReason,
        suggestions: Vec<Location>,
    },
    /// The game had already ended; nothing was played.
    GameOver(WinnerSummary),
}

impl Outcome {
    /// Returns whether the move was played.
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Applied(board) => write!(f, "{}", board),
            Outcome::Rejected { suggestions, .. } => {
                f.write_str("Invalid move. Here are the valid moves: ")?;
                location::format_locations(suggestions, f)
            }
            Outcome::GameOver(summary) => write!(f, "Game is ended. {}", summary),
        }
    }
}

/// The complete state of an Othello game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    over: bool,
}

impl Default for Game {
    /// Gets a game at the starting position.
    fn default() -> Self {
        Self::new()
    }
}

/// Start a game from the standard opening position.
pub fn new_game() -> Game {
    Game::new()
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Resume play from an arbitrary position.
    /// A position where neither color can move starts out finished.
    pub fn from_board(board: Board) -> Self {
        Self {
            over: rules::is_terminal(&board),
            board,
            players: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Add a player. Colors are not checked for duplicates; when two players
    /// share a color, the first registered is credited with a win.
    pub fn register_player(&mut self, name: impl Into<String>, color: Color) {
        let player = Player::new(name, color);
        debug!(name = %player.name, %color, "registered player");
        self.players.push(player);
    }

    /// Returns whether neither color has a legal move left.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.over
    }

    /// Current piece counts.
    pub fn score(&self) -> Score {
        Score {
            black: self.board.count(Color::Black),
            white: self.board.count(Color::White),
        }
    }

    /// The legal placements for `color` on the current board, row-major.
    pub fn available_positions(&self, color: Color) -> Vec<Location> {
        rules::available_positions(&self.board, color)
    }

    /// Decide the result from the piece counts. Higher count wins; equal is a tie.
    /// Meaningful once [`Game::is_terminal`] is true, but computable at any time.
    pub fn winner_summary(&self) -> WinnerSummary {
        let score = self.score();
        let color = match score.black.cmp(&score.white) {
            std::cmp::Ordering::Equal => return WinnerSummary::Tie,
            std::cmp::Ordering::Greater => Color::Black,
            std::cmp::Ordering::Less => Color::White,
        };

        let name = self
            .players
            .iter()
            .find(|player| player.color == color)
            .map(|player| player.name.clone());

        WinnerSummary::Win { color, name }
    }

    /// Try to place a piece of `color` at `loc`.
    ///
    /// Refused moves leave the game untouched and carry the current list of
    /// legal placements for `color`. Once the game is over, every call
    /// reports the final result instead.
    pub fn attempt_move(&mut self, color: Color, loc: Location) -> Outcome {
        if self.over {
            debug!(%color, %loc, "move attempted after the game ended");
            return Outcome::GameOver(self.winner_summary());
        }

        if !loc.is_interior() {
            return self.reject(color, loc, RejectReason::OutOfBounds);
        }

        if self.board.get(loc) != Some(Cell::Empty) {
            return self.reject(color, loc, RejectReason::NoCapture);
        }

        let directions = rules::legal_directions(&self.board, color, loc);
        if directions.is_empty() {
            return self.reject(color, loc, RejectReason::NoCapture);
        }

        self.apply_move(color, loc, directions);
        Outcome::Applied(self.board)
    }

    fn reject(&self, color: Color, loc: Location, reason: RejectReason) -> Outcome {
        let suggestions = self.available_positions(color);
        debug!(%color, %loc, %reason, legal = suggestions.len(), "rejected move");
        Outcome::Rejected {
            reason,
            suggestions,
        }
    }

    /// Place the piece and flip every captured run.
    /// `directions` must be the legal directions for this placement.
    fn apply_move(&mut self, color: Color, loc: Location, directions: DirectionSet) {
        // Runs are measured before the placement so each walk sees the same board
        // the legality check did.
        let runs: Vec<_> = directions
            .filter_map(|direction| {
                rules::capture_run(&self.board, color, loc, direction)
                    .map(|(first, run)| (direction, first, run))
            })
            .collect();

        self.board.place(loc, color);

        for (direction, first, run) in runs {
            trace!(%direction, flipped = run, "capturing run");
            let walk = iter::successors(Some(first), |cursor| cursor.step(direction));
            for captured in walk.take(run) {
                self.board.place(captured, color);
            }
        }

        let score = self.score();
        debug!(%color, %loc, %score, "applied move");

        if rules::is_terminal(&self.board) {
            self.over = true;
            debug!(%score, "game over");
        }
    }
}
