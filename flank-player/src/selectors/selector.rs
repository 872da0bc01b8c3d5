use derive_more::{Display, Error};
use flank_othello::{Board, Location, LocationList, MoveError, Player};
use tracing::debug;

/// Why a computer move could not be produced.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum SelectError {
    /// The selector was asked to move with an empty legal-move set.
    #[display(fmt = "no legal moves to choose from")]
    NoLegalMoves,
    /// The session refused the chosen move.
    #[display(fmt = "selected move was rejected: {}", _0)]
    Rejected(MoveError),
}

impl From<MoveError> for SelectError {
    fn from(err: MoveError) -> Self {
        SelectError::Rejected(err)
    }
}

/// A policy for picking one move out of a non-empty legal-move set.
pub trait MoveSelector {
    /// Choose a move for `player` from `legal`, which must hold the legal
    /// moves for `player` on `board` in row-major order.
    fn select(
        &mut self,
        board: &Board,
        player: Player,
        legal: &LocationList,
    ) -> Result<Location, SelectError>;
}

/// Pick the highest-scoring move, keeping the earliest one on ties.
/// Moves scored as None are skipped.
pub(crate) fn first_best<F>(legal: &LocationList, mut score: F) -> Result<Location, SelectError>
where
    F: FnMut(Location) -> Option<i32>,
{
    let mut best: Option<(Location, i32)> = None;

    for &loc in legal.iter() {
        let Some(value) = score(loc) else {
            continue;
        };
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((loc, value)),
        }
    }

    let (choice, value) = best.ok_or(SelectError::NoLegalMoves)?;
    debug!(%choice, score = value, "selected highest-scoring move");
    Ok(choice)
}
