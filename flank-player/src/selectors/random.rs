use super::{MoveSelector, SelectError};
use flank_othello::{Board, Location, LocationList, Player};
use rand::seq::SliceRandom;
use rand::Rng;

/// Easy tier: a uniformly random legal move.
pub struct RandomSelector<R> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSelector for RandomSelector<R> {
    fn select(
        &mut self,
        _board: &Board,
        _player: Player,
        legal: &LocationList,
    ) -> Result<Location, SelectError> {
        legal
            .choose(&mut self.rng)
            .copied()
            .ok_or(SelectError::NoLegalMoves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn picks_only_legal_moves() {
        let board = Board::new();
        let legal = board.valid_moves(Player::Black);
        let mut selector = RandomSelector::new(StdRng::seed_from_u64(7));

        for _ in 0..50 {
            let choice = selector.select(&board, Player::Black, &legal).unwrap();
            assert!(legal.contains(&choice));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let board = Board::new();
        let legal = board.valid_moves(Player::Black);
        let mut a = RandomSelector::new(StdRng::seed_from_u64(42));
        let mut b = RandomSelector::new(StdRng::seed_from_u64(42));

        for _ in 0..10 {
            assert_eq!(
                a.select(&board, Player::Black, &legal),
                b.select(&board, Player::Black, &legal)
            );
        }
    }

    #[test]
    fn eventually_picks_every_move() {
        let board = Board::new();
        let legal = board.valid_moves(Player::Black);
        let mut selector = RandomSelector::new(StdRng::seed_from_u64(1));
        let seen: std::collections::HashSet<_> = (0..200)
            .map(|_| selector.select(&board, Player::Black, &legal).unwrap())
            .collect();
        assert_eq!(seen.len(), legal.len());
    }

    #[test]
    fn empty_set_is_an_error() {
        let mut selector = RandomSelector::new(StdRng::seed_from_u64(0));
        assert_eq!(
            selector.select(&Board::new(), Player::Black, &LocationList::new()),
            Err(SelectError::NoLegalMoves)
        );
    }
}
