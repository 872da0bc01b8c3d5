//! Move legality, legal-move enumeration and flip resolution.
//!
//! A move is legal when the target square is empty and, in at least one of
//! the eight [`DIRECTIONS`], the adjacent run of opponent discs is closed
//! off by one of the mover's own discs. Runs that end at an empty square or
//! the board edge capture nothing.

use crate::board::{Board, Cell};
use crate::direction::{Direction, DIRECTIONS};
use crate::game::Player;
use crate::location::{Location, LocationList};
use derive_more::{Display, Error};

/// Why a proposed move cannot be played.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, Error)]
pub enum MoveError {
    #[display(fmt = "that square is already occupied")]
    Occupied,
    #[display(fmt = "that move does not flank any discs")]
    NoFlankingCapture,
    #[display(fmt = "that square is off the board")]
    OutOfBounds,
    #[display(fmt = "it is not that player's turn")]
    NotYourTurn,
    #[display(fmt = "the game is over")]
    GameOver,
}

impl From<crate::board::OutOfBounds> for MoveError {
    fn from(_: crate::board::OutOfBounds) -> Self {
        MoveError::OutOfBounds
    }
}

impl Board {
    /// Count the opponent discs flanked by `player` when moving from `loc`
    /// along `dir`. Zero when the run is empty or not closed by `player`.
    fn flanked_run(&self, loc: Location, dir: Direction, player: Player) -> usize {
        let opponent = Cell::Disc(player.opponent());
        let mut run = 0;
        let mut cursor = loc.offset(dir.0, dir.1);

        while let Some(next) = cursor {
            match self[next] {
                cell if cell == opponent => run += 1,
                Cell::Disc(_) => return run,
                Cell::Empty => return 0,
            }
            cursor = next.offset(dir.0, dir.1);
        }

        // Ran off the edge.
        0
    }

    /// Whether `player` may place a disc at `loc`.
    pub fn is_valid_move(&self, loc: Location, player: Player) -> bool {
        self[loc].is_empty()
            && DIRECTIONS
                .iter()
                .any(|&dir| self.flanked_run(loc, dir, player) > 0)
    }

    /// Like [`Board::is_valid_move`], but says why a move is illegal.
    pub fn check_move(&self, loc: Location, player: Player) -> Result<(), MoveError> {
        if !self[loc].is_empty() {
            return Err(MoveError::Occupied);
        }
        if !self.is_valid_move(loc, player) {
            return Err(MoveError::NoFlankingCapture);
        }
        Ok(())
    }

    /// All legal moves for `player`, in row-major order.
    pub fn valid_moves(&self, player: Player) -> LocationList {
        Location::all()
            .filter(|&loc| self.is_valid_move(loc, player))
            .collect()
    }

    /// Whether `player` has any legal move at all.
    pub fn has_valid_move(&self, player: Player) -> bool {
        Location::all().any(|loc| self.is_valid_move(loc, player))
    }

    /// The discs that would flip if `player` moved at `loc`, without
    /// touching the board. Empty when the move is illegal.
    pub fn flips(&self, loc: Location, player: Player) -> LocationList {
        let mut flipped = LocationList::new();
        if !self[loc].is_empty() {
            return flipped;
        }

        for &(d_row, d_col) in DIRECTIONS.iter() {
            let run = self.flanked_run(loc, (d_row, d_col), player);
            let mut cursor = loc;
            for _ in 0..run {
                match cursor.offset(d_row, d_col) {
                    Some(next) => {
                        flipped.push(next);
                        cursor = next;
                    }
                    None => break,
                }
            }
        }

        flipped
    }

    /// The number of discs `player` would flip by moving at `loc`.
    #[inline]
    pub fn count_flips(&self, loc: Location, player: Player) -> usize {
        self.flips(loc, player).len()
    }

    /// Place a disc for `player` at `loc` and flip every flanked run.
    ///
    /// Returns the flipped locations, or None if the move is illegal, in
    /// which case the board is left untouched.
    pub fn apply_move(&mut self, loc: Location, player: Player) -> Option<LocationList> {
        let flipped = self.flips(loc, player);
        if flipped.is_empty() {
            return None;
        }

        self.set(loc, Cell::Disc(player));
        for &flip in flipped.iter() {
            self.set(flip, Cell::Disc(player));
        }

        Some(flipped)
    }

    /// A copy of this board with the move applied, or None if it is illegal.
    pub fn with_move(&self, loc: Location, player: Player) -> Option<Board> {
        let mut scratch = *self;
        scratch.apply_move(loc, player).map(|_| scratch)
    }
}
