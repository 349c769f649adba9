//! Dice and what they rolled.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// A die with a fixed number of sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die(u32);

impl Die {
    /// The six-sided die every move is rolled with.
    pub const D6: Die = Die(6);

    /// Number of faces.
    pub fn sides(self) -> u32 {
        self.0
    }

    /// Roll once.
    pub fn roll(self, rng: &mut StdRng) -> DieResult {
        DieResult {
            die: self,
            value: rng.random_range(1..=self.0),
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.0)
    }
}

/// One die and the face it landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The die that was rolled.
    pub die: Die,
    /// The face that came up.
    pub value: u32,
}

/// Several dice thrown together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual faces, in throw order.
    pub dice: Vec<DieResult>,
}

impl RollResult {
    /// Throw every die in `dice` once.
    pub fn throw(dice: &[Die], rng: &mut StdRng) -> Self {
        Self {
            dice: dice.iter().map(|die| die.roll(rng)).collect(),
        }
    }

    /// Two six-sided dice.
    pub fn two_d6(rng: &mut StdRng) -> Self {
        Self::throw(&[Die::D6, Die::D6], rng)
    }

    /// Sum of the faces.
    pub fn total(&self) -> u32 {
        self.dice.iter().map(|d| d.value).sum()
    }

    /// Whether the sum lies between all ones and all maximum faces.
    pub fn is_valid(&self) -> bool {
        let lowest = self.dice.len() as u32;
        let highest: u32 = self.dice.iter().map(|d| d.die.sides()).sum();
        (lowest..=highest).contains(&self.total())
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "[{}] = {}", faces.join(", "), self.total())
    }
}
