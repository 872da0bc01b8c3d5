//! `flank-player` chooses moves for the computer side of a [`flank_othello`]
//! game.
//!
//! Each difficulty tier is a [`MoveSelector`]. [`ComputerPlayer`] dispatches
//! to the selector for its tier, and [`Opponent`] drives it through a
//! [`Session`](flank_othello::Session) whenever it is the computer's turn.

pub mod computer;
pub mod config;
pub mod difficulty;
pub mod selectors;

pub use computer::{computer_move, ComputerPlayer, Opponent};
pub use config::{ConfigError, PlayConfig};
pub use difficulty::{Difficulty, HardPolicy};
pub use selectors::{MoveSelector, SelectError};
