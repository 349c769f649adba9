//! Dice mechanics for Standoff.
//!
//! Rolls dice and classifies a modified 2d6 total into the
//! miss / mixed / hit bands that drive every player move.

pub mod dice;
pub mod resolution;

pub use dice::{Die, DieResult, RollResult};
pub use resolution::{Band, MoveRoll, roll_move};
