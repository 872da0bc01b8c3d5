//! The 8x8 board of cells and positional queries over it.
//!
//! [`Board`] is plain data. Move legality and flip resolution live in
//! [`crate::rules`]; disc counting lives in [`crate::score`].

use crate::game::Player;
use crate::location::{Location, LocationList};
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;
use std::ops::Index;

/// The state of a single square.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Disc(Player),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Disc(Player::Black) => 'X',
            Cell::Disc(Player::White) => 'O',
        }
    }
}

/// An 8x8 grid of cells, addressed row-major by `(row, col)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

/// A coordinate fell outside `[0, 8) x [0, 8)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
#[display(fmt = "({}, {}) is off the board", row, col)]
pub struct OutOfBounds {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "unexpected board character {:?}", _0)]
    InvalidCell(#[error(not(source))] char),
    #[display(fmt = "expected 64 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
}

impl Board {
    /// A board with every cell empty.
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// The standard starting position: white on D4 and E5, black on E4 and D5.
    pub const fn new() -> Self {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        cells[3][3] = Cell::Disc(Player::White);
        cells[3][4] = Cell::Disc(Player::Black);
        cells[4][3] = Cell::Disc(Player::Black);
        cells[4][4] = Cell::Disc(Player::White);
        Self { cells }
    }

    /// Read a cell, rejecting coordinates off the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, OutOfBounds> {
        let loc = Location::from_coords(row, col).ok_or(OutOfBounds { row, col })?;
        Ok(self[loc])
    }

    /// Overwrite a cell, rejecting coordinates off the board.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), OutOfBounds> {
        let loc = Location::from_coords(row, col).ok_or(OutOfBounds { row, col })?;
        self.set(loc, cell);
        Ok(())
    }

    #[inline]
    pub fn get(&self, loc: Location) -> Cell {
        self.cells[loc.row()][loc.col()]
    }

    #[inline]
    pub fn set(&mut self, loc: Location, cell: Cell) {
        self.cells[loc.row()][loc.col()] = cell;
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Whether every square holds a disc.
    pub fn is_full(&self) -> bool {
        self.cells().all(|cell| !cell.is_empty())
    }

    /// Render the board with `hints` marked as `*`, for showing legal moves.
    pub fn display_with_hints<'a>(&'a self, hints: &'a LocationList) -> impl fmt::Display + 'a {
        HintedBoard { board: self, hints }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Location> for Board {
    type Output = Cell;

    #[inline]
    fn index(&self, loc: Location) -> &Cell {
        &self.cells[loc.row()][loc.col()]
    }
}

/// Lay the board out with column letters and row numbers matching
/// [`Location`] notation, one row per line.
fn write_grid<F>(f: &mut fmt::Formatter<'_>, square: F) -> fmt::Result
where
    F: Fn(Location) -> char,
{
    write!(f, "   A B C D E F G H")?;
    for row in 0..EDGE_LENGTH {
        write!(f, "\n {} ", row + 1)?;
        for loc in (0..EDGE_LENGTH).filter_map(|col| Location::from_coords(row, col)) {
            write!(f, "{} ", square(loc))?;
        }
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, |loc| self[loc].to_char())
    }
}

struct HintedBoard<'a> {
    board: &'a Board,
    hints: &'a LocationList,
}

impl fmt::Display for HintedBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, |loc| {
            if self.hints.contains(&loc) {
                '*'
            } else {
                self.board[loc].to_char()
            }
        })
    }
}

/// Parse a board from 64 cell characters in row-major order. Whitespace is
/// ignored, so boards may be written one row per line.
/// `X`/`B` is black, `O`/`W` is white and `-`/`.` is empty.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut count = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch.to_ascii_uppercase() {
                'X' | 'B' => Cell::Disc(Player::Black),
                'O' | 'W' => Cell::Disc(Player::White),
                '-' | '.' => Cell::Empty,
                _ => return Err(ParseBoardError::InvalidCell(ch)),
            };

            if let Some(loc) = Location::from_index(count) {
                board.set(loc, cell);
            }
            count += 1;
        }

        if count != NUM_SPACES {
            return Err(ParseBoardError::WrongLength(count));
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position() {
        let board = Board::new();
        assert_eq!(board.cell_at(3, 3), Ok(Cell::Disc(Player::White)));
        assert_eq!(board.cell_at(3, 4), Ok(Cell::Disc(Player::Black)));
        assert_eq!(board.cell_at(4, 3), Ok(Cell::Disc(Player::Black)));
        assert_eq!(board.cell_at(4, 4), Ok(Cell::Disc(Player::White)));
        assert_eq!(board.cells().filter(|c| c.is_empty()).count(), 60);
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut board = Board::new();
        assert_eq!(board.cell_at(8, 0), Err(OutOfBounds { row: 8, col: 0 }));
        assert_eq!(board.cell_at(0, 8), Err(OutOfBounds { row: 0, col: 8 }));
        assert_eq!(
            board.set_cell(3, 9, Cell::Disc(Player::Black)),
            Err(OutOfBounds { row: 3, col: 9 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn set_cell_overwrites() {
        let mut board = Board::empty();
        board.set_cell(7, 0, Cell::Disc(Player::White)).unwrap();
        assert_eq!(board.cell_at(7, 0), Ok(Cell::Disc(Player::White)));
        board.set_cell(7, 0, Cell::Empty).unwrap();
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn parse_matches_display() {
        let text = "
            ........
            ........
            ........
            ...OX...
            ...XO...
            ........
            ........
            ........";
        assert_eq!(text.parse::<Board>(), Ok(Board::new()));
        assert!(Board::new().to_string().contains(" 4 . . . O X . . . "));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "X".repeat(63).parse::<Board>(),
            Err(ParseBoardError::WrongLength(63))
        );
        assert_eq!(
            "X".repeat(65).parse::<Board>(),
            Err(ParseBoardError::WrongLength(65))
        );
        assert_eq!(
            format!("{}?", "-".repeat(63)).parse::<Board>(),
            Err(ParseBoardError::InvalidCell('?'))
        );
    }

    #[test]
    fn grid_labels_match_location_notation() {
        let mut board = Board::empty();
        board.set("C7".parse().unwrap(), Cell::Disc(Player::White));
        let rendered = board.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "   A B C D E F G H");
        assert_eq!(lines[7], " 7 . . O . . . . . ");
        assert_eq!(lines[8], " 8 . . . . . . . . ");
    }

    #[test]
    fn default_cell_is_empty() {
        assert_eq!(Cell::default(), Cell::Empty);
        assert!(Board::empty().cells().all(|cell| cell == Cell::default()));
    }

    #[test]
    fn hints_render_as_stars() {
        let board = Board::new();
        let hints: LocationList = [Location::from_coords(2, 3).unwrap()].into_iter().collect();
        let rendered = board.display_with_hints(&hints).to_string();
        assert!(rendered.contains(" 3 . . . * . . . . "));
    }
}
