//! `flank-othello` is the rules engine for 8x8 Othello.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] holds the grid of cells and implements the rules as
//!    positional queries: legality, legal-move enumeration, flip resolution
//!    and disc counting. It knows nothing about whose turn it is.
//!  - [`Session`] is a high-level, safe interface to a whole game. It owns
//!    the board, tracks turn ownership and forced passes, detects the end of
//!    the game and reports every rejected move as a typed [`MoveError`].

pub mod direction;
pub mod test_utils;

mod board;
mod game;
mod location;
mod rules;
mod score;

pub use board::*;
pub use game::*;
pub use location::*;
pub use rules::*;
pub use score::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
