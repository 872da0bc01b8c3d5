//! Move selectors: one policy per difficulty tier, behind [`MoveSelector`].

mod differential;
mod greedy;
mod positional;
mod random;
mod selector;

pub use differential::{DifferentialSelector, DifferentialWeights};
pub use greedy::GreedySelector;
pub use positional::{PositionalSelector, FLIP_WEIGHT, POSITION_WEIGHTS};
pub use random::RandomSelector;
pub use selector::{MoveSelector, SelectError};
