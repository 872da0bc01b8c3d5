//! Disc counting and winner determination.

use crate::board::{Board, Cell};
use crate::game::Player;
use crate::location::Location;
use std::fmt;

/// The four corner squares.
pub const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 7), (7, 0), (7, 7)];

/// Disc totals for a board. `black + white + empty` is always 64.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiscCounts {
    pub black: u8,
    pub white: u8,
    pub empty: u8,
}

impl DiscCounts {
    /// Discs owned by `player`.
    #[inline]
    pub fn of(self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// The result if the game ended with these counts: majority wins.
    pub fn result(self) -> GameResult {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => GameResult::Win(Player::Black),
            std::cmp::Ordering::Less => GameResult::Win(Player::White),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GameResult {
    Win(Player),
    Draw,
}

impl GameResult {
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Win(player) => Some(player),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win(player) => write!(f, "{} wins!", player),
            GameResult::Draw => f.write_str("Draw!"),
        }
    }
}

impl Board {
    /// Count black, white and empty cells.
    pub fn disc_counts(&self) -> DiscCounts {
        self.cells().fold(DiscCounts::default(), |mut counts, cell| {
            match cell {
                Cell::Empty => counts.empty += 1,
                Cell::Disc(Player::Black) => counts.black += 1,
                Cell::Disc(Player::White) => counts.white += 1,
            }
            counts
        })
    }

    /// Score a board as: # `player` discs - # opponent discs.
    pub fn disc_difference(&self, player: Player) -> i8 {
        let counts = self.disc_counts();
        counts.of(player) as i8 - counts.of(player.opponent()) as i8
    }

    /// The number of corners held by `player`.
    pub fn corner_count(&self, player: Player) -> u8 {
        CORNERS
            .iter()
            .filter_map(|&(row, col)| Location::from_coords(row, col))
            .filter(|&loc| self[loc] == Cell::Disc(player))
            .count() as u8
    }

    /// The number of legal moves available to `player`.
    pub fn mobility(&self, player: Player) -> usize {
        self.valid_moves(player).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_counts() {
        let counts = Board::new().disc_counts();
        assert_eq!(
            counts,
            DiscCounts {
                black: 2,
                white: 2,
                empty: 60
            }
        );
        assert_eq!(counts.result(), GameResult::Draw);
    }

    #[test]
    fn majority_wins() {
        let board: Board = format!("{}{}", "X".repeat(40), "O".repeat(24))
            .parse()
            .unwrap();
        let counts = board.disc_counts();
        assert_eq!((counts.black, counts.white, counts.empty), (40, 24, 0));
        assert_eq!(counts.result(), GameResult::Win(Player::Black));
        assert_eq!(counts.result().winner(), Some(Player::Black));
        assert_eq!(board.disc_difference(Player::White), -16);
    }

    #[test]
    fn white_majority_with_empties() {
        let board: Board = format!("{}{}{}", "O".repeat(10), "-".repeat(50), "X".repeat(4))
            .parse()
            .unwrap();
        assert_eq!(board.disc_counts().result(), GameResult::Win(Player::White));
        assert_eq!(board.disc_counts().empty, 50);
    }

    #[test]
    fn corners_and_mobility() {
        let board: Board = format!("X{}O{}X", "-".repeat(55), "-".repeat(6))
            .parse()
            .unwrap();
        assert_eq!(board.corner_count(Player::Black), 2);
        assert_eq!(board.corner_count(Player::White), 1);
        assert_eq!(Board::new().mobility(Player::Black), 4);
    }

    #[test]
    fn result_display() {
        assert_eq!(GameResult::Win(Player::White).to_string(), "White wins!");
        assert_eq!(GameResult::Draw.to_string(), "Draw!");
    }
}
