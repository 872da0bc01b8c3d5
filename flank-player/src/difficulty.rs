//! Difficulty tiers for the computer opponent.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How hard the computer opponent plays.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal moves.
    Easy,
    /// The move that flips the most discs.
    #[default]
    Medium,
    /// A one-ply static evaluation; see [`HardPolicy`].
    Hard,
}

/// Which static evaluation the hard tier uses.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HardPolicy {
    /// Square weight plus twice the flip count.
    #[default]
    Positional,
    /// Disc, corner and mobility differences after the move.
    Differential,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "expected one of: easy, medium, hard")]
pub struct ParseDifficultyError;

impl std::str::FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "expected one of: positional, differential")]
pub struct ParseHardPolicyError;

impl std::str::FromStr for HardPolicy {
    type Err = ParseHardPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positional" => Ok(HardPolicy::Positional),
            "differential" => Ok(HardPolicy::Differential),
            _ => Err(ParseHardPolicyError),
        }
    }
}
