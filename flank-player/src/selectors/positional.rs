use super::selector::first_best;
use super::{MoveSelector, SelectError};
use flank_othello::{Board, Location, LocationList, Player, EDGE_LENGTH};

/// Static value of each square: corners are prized, the squares next to
/// them are dangerous, edges are decent and the centre is neutral.
pub const POSITION_WEIGHTS: [[i32; EDGE_LENGTH]; EDGE_LENGTH] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Each flipped disc is worth this many weight points.
pub const FLIP_WEIGHT: i32 = 2;

/// Hard tier (default policy): the square's static weight plus twice the
/// number of discs flipped. Looks only at the move itself, never at the
/// opponent's reply.
#[derive(Clone, Copy, Debug, Default)]
pub struct PositionalSelector;

impl PositionalSelector {
    pub fn score(board: &Board, loc: Location, player: Player) -> Option<i32> {
        let flips = board.count_flips(loc, player);
        if flips == 0 {
            return None;
        }
        Some(POSITION_WEIGHTS[loc.row()][loc.col()] + FLIP_WEIGHT * flips as i32)
    }
}

impl MoveSelector for PositionalSelector {
    fn select(
        &mut self,
        board: &Board,
        player: Player,
        legal: &LocationList,
    ) -> Result<Location, SelectError> {
        first_best(legal, |loc| Self::score(board, loc, player))
    }
}
