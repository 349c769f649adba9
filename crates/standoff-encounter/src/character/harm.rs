//! The harm track every character carries.
//!
//! Harm only goes up. Reaching the maximum kills the character and pins the
//! track at exactly the maximum, however far the last blow overshot.

use serde::{Deserialize, Serialize};

/// Harm a fresh character can absorb before dying.
pub const DEFAULT_HARM_MAX: u32 = 4;

/// Accumulated harm and the death flag that goes with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Harm {
    current: u32,
    max: u32,
    dead: bool,
}

impl Harm {
    /// Create an unharmed track with the given maximum.
    pub fn new(max: u32) -> Self {
        Self {
            current: 0,
            max,
            dead: false,
        }
    }

    /// Harm taken so far.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Harm at which the character dies.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Whether the character is dead. Never reverts.
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Add `amount` harm. Returns true if this blow was the killing one.
    pub fn take(&mut self, amount: u32) -> bool {
        let was_dead = self.dead;
        self.current = self.current.saturating_add(amount);
        if self.current >= self.max {
            self.current = self.max;
            self.dead = true;
        }
        self.dead && !was_dead
    }
}

impl Default for Harm {
    fn default() -> Self {
        Self::new(DEFAULT_HARM_MAX)
    }
}

impl std::fmt::Display for Harm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} Harm", self.current, self.max)
    }
}
