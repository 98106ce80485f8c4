//! The sentinel-bordered Othello [`Board`].
//!
//! The 8x8 playing surface is stored inside a 10x10 grid whose outer frame
//! is permanently [`Cell::Border`]. Scans walking outward from any interior
//! cell reach the frame before they can leave the grid.

use crate::game::Color;
use crate::location::Location;
use crate::{utils, GRID_SIZE};
use derive_more::{Display, Error};
use std::fmt;

/// The occupant of one grid cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display)]
pub enum Cell {
    #[display(fmt = ".")]
    Empty,
    #[display(fmt = "X")]
    Black,
    #[display(fmt = "O")]
    White,
    #[display(fmt = "*")]
    Border,
}

impl Cell {
    /// The single-character symbol used in text renderings.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
            Cell::Border => '*',
        }
    }

    /// Inverse of [`Cell::symbol`].
    #[inline]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Empty),
            'X' => Some(Cell::Black),
            'O' => Some(Cell::White),
            '*' => Some(Cell::Border),
            _ => None,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// The full backing grid, border included.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

/// A write the board refuses: the border and off-grid cells are immutable,
/// and no interior cell may hold a border.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum BoardError {
    #[display(fmt = "cannot write '{}' at {}: not a playable cell", cell, location)]
    InvalidCoordinate { location: Location, cell: Cell },
}

impl Default for Board {
    /// Gets the standard starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position: white on (4,4) and (5,5),
    /// black on (4,5) and (5,4).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[4][4] = Cell::White;
        board.cells[4][5] = Cell::Black;
        board.cells[5][4] = Cell::Black;
        board.cells[5][5] = Cell::White;
        board
    }

    /// A border frame around an entirely empty interior.
    pub fn empty() -> Self {
        let mut cells = [[Cell::Border; GRID_SIZE]; GRID_SIZE];
        for loc in Location::interior() {
            cells[loc.row][loc.col] = Cell::Empty;
        }
        Self { cells }
    }

    /// Get the occupant of a cell.
    /// Panics if `row` or `col` is off the backing grid.
    #[inline]
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Get the occupant of a cell, or None if `loc` is off the backing grid.
    #[inline]
    pub fn get(&self, loc: Location) -> Option<Cell> {
        self.cells.get(loc.row)?.get(loc.col).copied()
    }

    /// Overwrite one interior cell.
    /// Fails without touching the board if `loc` is not interior or `cell` is a border.
    pub fn set_cell(&mut self, loc: Location, cell: Cell) -> Result<(), BoardError> {
        if !loc.is_interior() || cell == Cell::Border {
            return Err(BoardError::InvalidCoordinate {
                location: loc,
                cell,
            });
        }

        self.cells[loc.row][loc.col] = cell;
        Ok(())
    }

    /// Put a piece of `color` on an interior cell.
    /// Callers must already have ruled out non-interior locations.
    #[inline]
    pub(crate) fn place(&mut self, loc: Location, color: Color) {
        assert!(loc.is_interior(), "piece placed outside the interior at {}", loc);
        self.cells[loc.row][loc.col] = color.into();
    }

    /// Count the pieces of one color.
    pub fn count(&self, color: Color) -> u8 {
        self.count_cells(color.into())
    }

    /// Count the empty playable cells.
    pub fn count_empty(&self) -> u8 {
        self.count_cells(Cell::Empty)
    }

    fn count_cells(&self, target: Cell) -> u8 {
        Location::interior()
            .filter(|loc| self.cells[loc.row][loc.col] == target)
            .count() as u8
    }

    /// Iterate the empty playable cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Location> + '_ {
        Location::interior().filter(move |loc| self.cells[loc.row][loc.col] == Cell::Empty)
    }

    /// The symbol for every cell, row-major: `*` border, `X` black, `O` white, `.` empty.
    pub fn render_rows(&self) -> [[char; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [['*'; GRID_SIZE]; GRID_SIZE];
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                rows[row][col] = cell.symbol();
            }
        }
        rows
    }

    /// Build a board from a grid of symbols, checking the border frame.
    pub fn from_rows(rows: &[[char; GRID_SIZE]; GRID_SIZE]) -> Result<Self, ParseBoardError> {
        let mut cells = [[Cell::Border; GRID_SIZE]; GRID_SIZE];

        for (row, symbols) in rows.iter().enumerate() {
            for (col, &symbol) in symbols.iter().enumerate() {
                let cell =
                    Cell::from_symbol(symbol).ok_or(ParseBoardError::UnknownSymbol { symbol })?;
                let location = Location::new(row, col);

                match (location.is_interior(), cell) {
                    (true, Cell::Border) => {
                        return Err(ParseBoardError::MisplacedBorder { location })
                    }
                    (false, Cell::Border) | (true, _) => cells[row][col] = cell,
                    (false, _) => return Err(ParseBoardError::MissingBorder { location }),
                }
            }
        }

        Ok(Self { cells })
    }
}

/// The symbol grid of `board`, for a text renderer to print verbatim.
pub fn render_rows(board: &Board) -> [[char; GRID_SIZE]; GRID_SIZE] {
    board.render_rows()
}

/// Prints the board one row per line, symbols separated by spaces.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.render_rows().iter().flatten().copied(), f)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected {} rows, found {}", GRID_SIZE, found)]
    WrongRowCount { found: usize },
    #[display(fmt = "expected {} symbols in row {}, found {}", GRID_SIZE, row, found)]
    WrongRowLength { row: usize, found: usize },
    #[display(fmt = "unknown board symbol '{}'", symbol)]
    UnknownSymbol { symbol: char },
    #[display(fmt = "border symbol inside the playing area at {}", location)]
    MisplacedBorder { location: Location },
    #[display(fmt = "border frame is broken at {}", location)]
    MissingBorder { location: Location },
}

/// Parse the text printed by [`Board`]'s `Display`.
/// Blank lines and whitespace between symbols are ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<char>>())
            .filter(|symbols| !symbols.is_empty())
            .collect();

        if lines.len() != GRID_SIZE {
            return Err(ParseBoardError::WrongRowCount { found: lines.len() });
        }

        let mut rows = [['*'; GRID_SIZE]; GRID_SIZE];
        for (row, symbols) in lines.iter().enumerate() {
            if symbols.len() != GRID_SIZE {
                return Err(ParseBoardError::WrongRowLength {
                    row,
                    found: symbols.len(),
                });
            }
            rows[row].copy_from_slice(symbols);
        }

        Self::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NUM_SPACES;
    use std::str::FromStr;

    const START: &str = "\
* * * * * * * * * *
* . . . . . . . . *
* . . . . . . . . *
* . . . . . . . . *
* . . . O X . . . *
* . . . X O . . . *
* . . . . . . . . *
* . . . . . . . . *
* . . . . . . . . *
* * * * * * * * * *";

    #[test]
    fn starting_position() {
        let board = Board::new();
        assert_eq!(board.cell_at(4, 4), Cell::White);
        assert_eq!(board.cell_at(4, 5), Cell::Black);
        assert_eq!(board.cell_at(5, 4), Cell::Black);
        assert_eq!(board.cell_at(5, 5), Cell::White);
        assert_eq!(board.count(Color::Black), 2);
        assert_eq!(board.count(Color::White), 2);
        assert_eq!(board.count_empty(), 60);
    }

    #[test]
    fn border_frame() {
        let board = Board::new();
        for i in 0..GRID_SIZE {
            assert_eq!(board.cell_at(0, i), Cell::Border);
            assert_eq!(board.cell_at(9, i), Cell::Border);
            assert_eq!(board.cell_at(i, 0), Cell::Border);
            assert_eq!(board.cell_at(i, 9), Cell::Border);
        }
    }

    #[test]
    #[should_panic]
    fn cell_at_off_grid() {
        Board::new().cell_at(10, 0);
    }

    #[test]
    fn get_off_grid() {
        let board = Board::new();
        assert_eq!(board.get(Location::new(0, 0)), Some(Cell::Border));
        assert_eq!(board.get(Location::new(10, 3)), None);
        assert_eq!(board.get(Location::new(3, 10)), None);
    }

    #[test]
    fn set_cell_interior() {
        let mut board = Board::new();
        assert_eq!(board.set_cell(Location::new(1, 8), Cell::Black), Ok(()));
        assert_eq!(board.cell_at(1, 8), Cell::Black);
        assert_eq!(board.set_cell(Location::new(4, 4), Cell::Empty), Ok(()));
        assert_eq!(board.cell_at(4, 4), Cell::Empty);
    }

    #[test]
    fn set_cell_rejects_border() {
        let mut board = Board::new();
        let before = board;

        for loc in [Location::new(0, 3), Location::new(9, 9), Location::new(4, 0)] {
            assert_eq!(
                board.set_cell(loc, Cell::White),
                Err(BoardError::InvalidCoordinate {
                    location: loc,
                    cell: Cell::White
                })
            );
        }
        assert!(board.set_cell(Location::new(11, 2), Cell::Black).is_err());
        assert!(board.set_cell(Location::new(3, 3), Cell::Border).is_err());
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic]
    fn place_on_border() {
        Board::new().place(Location::new(0, 4), Color::Black);
    }

    #[test]
    fn empty_cells_row_major() {
        let board = Board::new();
        let empties: Vec<Location> = board.empty_cells().collect();
        assert_eq!(empties.len(), NUM_SPACES - 4);
        assert_eq!(empties[0], Location::new(1, 1));
        assert!(!empties.contains(&Location::new(4, 4)));
        assert!(empties.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn empty_board() {
        let board = Board::empty();
        assert_eq!(board.count_empty() as usize, NUM_SPACES);
        assert_eq!(board.count(Color::Black), 0);
        assert_eq!(board.cell_at(0, 0), Cell::Border);
    }

    #[test]
    fn render_starting_position() {
        let rows = Board::new().render_rows();
        assert_eq!(rows[0], ['*'; GRID_SIZE]);
        assert_eq!(rows[4], ['*', '.', '.', '.', 'O', 'X', '.', '.', '.', '*']);
        assert_eq!(rows[5], ['*', '.', '.', '.', 'X', 'O', '.', '.', '.', '*']);
    }

    #[test]
    fn board_to_str() {
        assert_eq!(Board::new().to_string(), START);
    }

    #[test]
    fn board_from_str() {
        assert_eq!(Board::from_str(START), Ok(Board::new()));
    }

    #[test]
    fn render_then_parse_round_trip() {
        let mut board = Board::new();
        board.set_cell(Location::new(1, 1), Cell::Black).unwrap();
        board.set_cell(Location::new(8, 3), Cell::White).unwrap();

        assert_eq!(Board::from_rows(&board.render_rows()), Ok(board));
        assert_eq!(board.to_string().parse::<Board>(), Ok(board));
    }

    #[test]
    fn symbols_are_a_bijection() {
        for cell in [Cell::Empty, Cell::Black, Cell::White, Cell::Border] {
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
            assert_eq!(cell.to_string(), cell.symbol().to_string());
        }
        assert_eq!(Cell::from_symbol('#'), None);
    }

    #[test]
    fn board_from_str_fail() {
        assert_eq!(
            Board::from_str("* * *"),
            Err(ParseBoardError::WrongRowCount { found: 1 })
        );

        let short_row = START.replacen("* . . . O X . . . *", "* . . O X . . . *", 1);
        assert_eq!(
            Board::from_str(&short_row),
            Err(ParseBoardError::WrongRowLength { row: 4, found: 9 })
        );

        let unknown = START.replacen('O', "#", 1);
        assert_eq!(
            Board::from_str(&unknown),
            Err(ParseBoardError::UnknownSymbol { symbol: '#' })
        );

        let inner_border = START.replacen("* . . . O X", "* * . . O X", 1);
        assert_eq!(
            Board::from_str(&inner_border),
            Err(ParseBoardError::MisplacedBorder {
                location: Location::new(4, 1)
            })
        );

        let broken_frame = START.replacen("* * * * * * * * * *", "* * . * * * * * * *", 1);
        assert_eq!(
            Board::from_str(&broken_frame),
            Err(ParseBoardError::MissingBorder {
                location: Location::new(0, 2)
            })
        );
    }
}
