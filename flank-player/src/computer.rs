//! The computer opponent: tier dispatch and the turn driver.

use crate::difficulty::{Difficulty, HardPolicy};
use crate::selectors::{
    DifferentialSelector, GreedySelector, MoveSelector, PositionalSelector, RandomSelector,
    SelectError,
};
use flank_othello::{Board, Location, LocationList, Placement, Player, Session};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Chooses moves for one difficulty tier.
#[derive(Clone, Debug)]
pub struct ComputerPlayer<R = StdRng> {
    difficulty: Difficulty,
    hard_policy: HardPolicy,
    rng: R,
}

impl ComputerPlayer<StdRng> {
    /// A computer player with an entropy-seeded RNG.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_entropy())
    }

    /// A computer player whose random choices are reproducible.
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ComputerPlayer<R> {
    pub fn with_rng(difficulty: Difficulty, rng: R) -> Self {
        Self {
            difficulty,
            hard_policy: HardPolicy::default(),
            rng,
        }
    }

    pub fn with_hard_policy(mut self, hard_policy: HardPolicy) -> Self {
        self.hard_policy = hard_policy;
        self
    }

    /// Choose a move for whoever is to move in `session`.
    pub fn choose(&mut self, session: &Session) -> Result<Location, SelectError> {
        if session.is_over().is_some() {
            return Err(SelectError::NoLegalMoves);
        }
        self.select(session.board(), session.current_player(), session.legal_moves())
    }
}

impl<R: Rng> MoveSelector for ComputerPlayer<R> {
    #[instrument(level = "debug", skip(self, board, legal), fields(difficulty = %self.difficulty))]
    fn select(
        &mut self,
        board: &Board,
        player: Player,
        legal: &LocationList,
    ) -> Result<Location, SelectError> {
        if legal.is_empty() {
            return Err(SelectError::NoLegalMoves);
        }

        match (self.difficulty, self.hard_policy) {
            (Difficulty::Easy, _) => RandomSelector::new(&mut self.rng).select(board, player, legal),
            (Difficulty::Medium, _) => GreedySelector.select(board, player, legal),
            (Difficulty::Hard, HardPolicy::Positional) => {
                PositionalSelector.select(board, player, legal)
            }
            (Difficulty::Hard, HardPolicy::Differential) => {
                DifferentialSelector::default().select(board, player, legal)
            }
        }
    }
}

/// Choose a computer move for the player to move in `session`.
/// The caller applies it with [`Session::play`].
pub fn computer_move(session: &Session, difficulty: Difficulty) -> Result<Location, SelectError> {
    ComputerPlayer::with_rng(difficulty, rand::thread_rng()).choose(session)
}

/// Plays one colour of a session on the computer's behalf.
#[derive(Clone, Debug)]
pub struct Opponent<R = StdRng> {
    color: Player,
    computer: ComputerPlayer<R>,
}

impl<R: Rng> Opponent<R> {
    pub fn new(color: Player, computer: ComputerPlayer<R>) -> Self {
        Self { color, computer }
    }

    pub fn color(&self) -> Player {
        self.color
    }

    /// Whether the computer should move now.
    pub fn to_move(&self, session: &Session) -> bool {
        session.is_over().is_none() && session.current_player() == self.color
    }

    /// Play a single move if it is the computer's turn.
    pub fn step(&mut self, session: &mut Session) -> Result<Option<Placement>, SelectError> {
        if !self.to_move(session) {
            return Ok(None);
        }

        let choice = self.computer.choose(session)?;
        let placement = session.play(choice)?;
        debug!(player = %self.color, location = %choice, "computer moved");
        Ok(Some(placement))
    }

    /// Keep moving until it is no longer the computer's turn. The computer
    /// moves repeatedly while its opponent is forced to pass.
    pub fn respond(&mut self, session: &mut Session) -> Result<Vec<Placement>, SelectError> {
        let mut placements = Vec::new();
        while let Some(placement) = self.step(session)? {
            placements.push(placement);
        }
        Ok(placements)
    }
}
