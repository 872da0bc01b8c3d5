use super::selector::first_best;
use super::{MoveSelector, SelectError};
use flank_othello::{Board, Location, LocationList, Player};

/// Weights for [`DifferentialSelector`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DifferentialWeights {
    pub corner: i32,
    pub mobility: i32,
}

impl Default for DifferentialWeights {
    fn default() -> Self {
        Self {
            corner: 10,
            mobility: 2,
        }
    }
}

/// Alternate hard-tier policy: play each candidate on a scratch copy of the
/// board and score the result by disc difference, corner difference and
/// mobility difference. The live board is never touched.
#[derive(Clone, Copy, Debug, Default)]
pub struct DifferentialSelector {
    pub weights: DifferentialWeights,
}

impl DifferentialSelector {
    pub fn new(weights: DifferentialWeights) -> Self {
        Self { weights }
    }

    /// Score `board` from `player`'s point of view.
    pub fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let opponent = player.opponent();
        let discs = board.disc_difference(player) as i32;
        let corners = board.corner_count(player) as i32 - board.corner_count(opponent) as i32;
        let mobility = board.mobility(player) as i32 - board.mobility(opponent) as i32;

        discs + self.weights.corner * corners + self.weights.mobility * mobility
    }
}

impl MoveSelector for DifferentialSelector {
    fn select(
        &mut self,
        board: &Board,
        player: Player,
        legal: &LocationList,
    ) -> Result<Location, SelectError> {
        first_best(legal, |loc| {
            board
                .with_move(loc, player)
                .map(|next| self.evaluate(&next, player))
        })
    }
}
