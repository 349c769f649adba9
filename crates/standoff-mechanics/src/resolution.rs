//! Move resolution: 2d6 plus a stat modifier, read against fixed bands.
//!
//! - **Miss**: 6 or less
//! - **Mixed**: 7 to 9
//! - **Hit**: 10 or more

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::dice::RollResult;

/// Highest total that still counts as a miss.
pub const MISS_CEILING: i32 = 6;

/// Highest total that still counts as a mixed result.
pub const MIXED_CEILING: i32 = 9;

/// The narrative band a modified roll falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Band {
    /// Things go wrong.
    Miss,
    /// Success at a cost.
    Mixed,
    /// Clean success.
    Hit,
}

impl Band {
    /// Classify a modified total.
    pub fn from_total(total: i32) -> Self {
        if total <= MISS_CEILING {
            Self::Miss
        } else if total <= MIXED_CEILING {
            Self::Mixed
        } else {
            Self::Hit
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Miss => write!(f, "Miss"),
            Self::Mixed => write!(f, "Mixed"),
            Self::Hit => write!(f, "Hit"),
        }
    }
}

/// A single resolved move roll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRoll {
    /// The dice as they came up.
    pub dice: RollResult,
    /// The stat modifier added to the dice.
    pub modifier: i32,
}

impl MoveRoll {
    /// The unmodified dice sum (2 to 12).
    pub fn raw(&self) -> i32 {
        self.dice.total() as i32
    }

    /// Dice sum plus modifier.
    pub fn total(&self) -> i32 {
        self.raw() + self.modifier
    }

    /// The band the total falls into.
    pub fn band(&self) -> Band {
        Band::from_total(self.total())
    }
}

/// Roll 2d6 and add `modifier`.
///
/// A raw sum outside 2..=12 cannot come out of a uniform draw; should one
/// ever appear the dice are rolled again.
pub fn roll_move(rng: &mut StdRng, modifier: i32) -> MoveRoll {
    loop {
        let dice = RollResult::two_d6(rng);
        if dice.is_valid() {
            let roll = MoveRoll { dice, modifier };
            tracing::debug!(
                raw = roll.raw(),
                modifier,
                total = roll.total(),
                band = %roll.band(),
                "move rolled"
            );
            return roll;
        }
        tracing::error!(raw = dice.total(), "invalid dice sum, rerolling");
    }
}
