//! Implements game-level Othello logic: turn ownership, forced passes and
//! game end.
//!
//! [`Session`] is the safe interface for driving a whole game. It owns the
//! [`Board`] and keeps the legal-move set for the player to move in sync
//! with it after every change.

use crate::board::Board;
use crate::location::{Location, LocationList};
use crate::rules::MoveError;
use crate::score::{DiscCounts, GameResult};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Gets the other player.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "expected \"black\" or \"white\"")]
pub struct ParsePlayerError;

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Player::Black),
            "white" | "w" | "o" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// Where a session stands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    AwaitingMove(Player),
    Over(GameResult),
}

/// The outcome of a successful move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    pub player: Player,
    pub location: Location,
    pub flipped: LocationList,
    /// The player forced to pass as a consequence of this move, if any.
    pub passed: Option<Player>,
}

/// A complete game: the board, whose turn it is, and whether it has ended.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Session {
    board: Board,
    to_move: Player,
    status: Status,
    legal_moves: LocationList,
    move_count: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh game at the starting position, black to move.
    pub fn new() -> Self {
        Self::from_position(Board::new(), Player::default())
    }

    /// Start from an arbitrary position.
    ///
    /// If `to_move` has no legal move the turn passes straight to the
    /// opponent; if neither side can move the session starts out over.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let mut session = Self {
            board,
            to_move,
            status: Status::AwaitingMove(to_move),
            legal_moves: LocationList::new(),
            move_count: 0,
        };
        session.settle(to_move);
        session
    }

    /// Give the turn to `next`, falling back to its opponent if `next` cannot
    /// move, and ending the game if neither can or the board is full.
    /// Returns the player who was forced to pass, if any.
    fn settle(&mut self, next: Player) -> Option<Player> {
        let fallback = next.opponent();

        if !self.board.is_full() {
            self.to_move = next;
            self.legal_moves = self.board.valid_moves(next);
            if !self.legal_moves.is_empty() {
                self.status = Status::AwaitingMove(next);
                return None;
            }

            self.to_move = fallback;
            self.legal_moves = self.board.valid_moves(fallback);
            if !self.legal_moves.is_empty() {
                info!(player = %next, "no legal moves; turn passes to {}", fallback);
                self.status = Status::AwaitingMove(fallback);
                return Some(next);
            }
        }

        self.to_move = fallback;
        self.legal_moves = LocationList::new();
        let counts = self.board.disc_counts();
        let result = counts.result();
        info!(black = counts.black, white = counts.white, %result, "game over");
        self.status = Status::Over(result);
        None
    }

    /// Play a disc for the player to move at `(row, col)`.
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<Placement, MoveError> {
        self.attempt_move_as(self.to_move, row, col)
    }

    /// Play a disc for `player` at `(row, col)`, rejecting the move if it is
    /// not `player`'s turn.
    ///
    /// Rejections never modify the session. They are checked in order:
    /// game over, wrong player, off the board, occupied, no capture.
    pub fn attempt_move_as(
        &mut self,
        player: Player,
        row: usize,
        col: usize,
    ) -> Result<Placement, MoveError> {
        if let Status::Over(_) = self.status {
            return Err(MoveError::GameOver);
        }
        if player != self.to_move {
            return Err(MoveError::NotYourTurn);
        }

        let location = Location::from_coords(row, col).ok_or(MoveError::OutOfBounds)?;
        self.board.check_move(location, player)?;
        let flipped = self
            .board
            .apply_move(location, player)
            .ok_or(MoveError::NoFlankingCapture)?;

        debug!(%player, %location, flipped = flipped.len(), "disc placed");
        self.move_count += 1;
        let passed = self.settle(player.opponent());

        Ok(Placement {
            player,
            location,
            flipped,
            passed,
        })
    }

    /// Play a disc for the player to move at `location`.
    pub fn play(&mut self, location: Location) -> Result<Placement, MoveError> {
        self.attempt_move(location.row(), location.col())
    }

    /// Throw the game away and start again from the starting position.
    pub fn reset(&mut self) {
        info!("session reset");
        *self = Self::new();
    }

    /// Legal moves for the player to move, in row-major order.
    /// Empty once the game is over.
    pub fn legal_moves(&self) -> &LocationList {
        &self.legal_moves
    }

    /// The player whose turn it is. Frozen once the game is over.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// The result, if the game has ended.
    pub fn is_over(&self) -> Option<GameResult> {
        match self.status {
            Status::Over(result) => Some(result),
            Status::AwaitingMove(_) => None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn disc_counts(&self) -> DiscCounts {
        self.board.disc_counts()
    }

    /// The number of discs placed since the session started.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board.display_with_hints(self.legal_moves()))?;
        let counts = self.disc_counts();
        write!(f, "Black: {}  White: {}  ", counts.black, counts.white)?;
        match self.status {
            Status::AwaitingMove(player) => write!(f, "Current player: {}", player),
            Status::Over(result) => write!(f, "{}", result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn player_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(Player::default(), Player::Black);
    }

    #[test]
    fn player_parse_and_display() {
        assert_eq!("Black".parse(), Ok(Player::Black));
        assert_eq!(" white ".parse(), Ok(Player::White));
        assert_eq!("grey".parse::<Player>(), Err(ParsePlayerError));
        assert_eq!(Player::White.to_string(), "White");
    }

    #[test]
    fn new_session_awaits_black() {
        let session = Session::new();
        assert_eq!(session.status(), Status::AwaitingMove(Player::Black));
        assert_eq!(session.legal_moves().len(), 4);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn move_hands_turn_to_opponent() {
        let mut session = Session::new();
        let placement = session.attempt_move(2, 3).unwrap();
        assert_eq!(placement.player, Player::Black);
        assert_eq!(placement.passed, None);
        assert_eq!(session.current_player(), Player::White);
        assert_eq!(session.legal_moves(), &session.board().valid_moves(Player::White));
        assert_eq!(session.board().cell_at(3, 3), Ok(Cell::Disc(Player::Black)));
    }

    #[test]
    fn rejections_leave_session_unchanged() {
        let mut session = Session::new();
        let before = session.clone();
        assert_eq!(session.attempt_move(3, 3), Err(MoveError::Occupied));
        assert_eq!(session.attempt_move(0, 0), Err(MoveError::NoFlankingCapture));
        assert_eq!(session.attempt_move(8, 2), Err(MoveError::OutOfBounds));
        assert_eq!(
            session.attempt_move_as(Player::White, 2, 4),
            Err(MoveError::NotYourTurn)
        );
        assert_eq!(session, before);
    }

    #[test]
    fn reset_restores_start() {
        let mut session = Session::new();
        session.attempt_move(2, 3).unwrap();
        session.reset();
        assert_eq!(session, Session::new());
    }

    #[test]
    fn display_shows_turn_and_counts() {
        let rendered = Session::new().to_string();
        assert!(rendered.contains("Black: 2  White: 2  Current player: Black"));
        assert!(rendered.contains(" 3 . . . * . . . . "));
    }
}
