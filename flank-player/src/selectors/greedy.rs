use super::selector::first_best;
use super::{MoveSelector, SelectError};
use flank_othello::{Board, Location, LocationList, Player};

/// Medium tier: the move that flips the most discs, earliest on ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySelector;

impl MoveSelector for GreedySelector {
    fn select(
        &mut self,
        board: &Board,
        player: Player,
        legal: &LocationList,
    ) -> Result<Location, SelectError> {
        first_best(legal, |loc| {
            let flips = board.count_flips(loc, player);
            (flips > 0).then_some(flips as i32)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_tie_goes_to_first_move() {
        // Every opening move flips exactly one disc.
        let board = Board::new();
        let legal = board.valid_moves(Player::Black);
        let choice = GreedySelector.select(&board, Player::Black, &legal).unwrap();
        assert_eq!(choice.to_coords(), (2, 3));
    }

    #[test]
    fn prefers_larger_capture() {
        // A1 flips one disc, E8 flips three.
        let board: Board = "
            -OX-----
            --------
            --------
            --------
            --------
            --------
            --------
            XOOO----"
            .parse()
            .unwrap();
        let legal = board.valid_moves(Player::Black);
        let choice = GreedySelector.select(&board, Player::Black, &legal).unwrap();
        assert_eq!(choice, "E8".parse().unwrap());
    }
}
