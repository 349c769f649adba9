//! The five player stats moves are rolled with.

use serde::{Deserialize, Serialize};

/// One of the player's stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    /// Charm and allure.
    Hot,
    /// Composure.
    Cold,
    /// Violence.
    Hard,
    /// Perception.
    Sharp,
    /// Attunement to the strange.
    Weird,
}

impl Stat {
    /// All stats in sheet order.
    pub const ALL: [Stat; 5] = [Self::Hot, Self::Cold, Self::Hard, Self::Sharp, Self::Weird];
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hot => write!(f, "hot"),
            Self::Cold => write!(f, "cold"),
            Self::Hard => write!(f, "hard"),
            Self::Sharp => write!(f, "sharp"),
            Self::Weird => write!(f, "weird"),
        }
    }
}

/// A player's stat line. Fixed once the character is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Hot.
    pub hot: i32,
    /// Cold.
    pub cold: i32,
    /// Hard.
    pub hard: i32,
    /// Sharp.
    pub sharp: i32,
    /// Weird.
    pub weird: i32,
}

impl Stats {
    /// Build a stat line in sheet order: hot, cold, hard, sharp, weird.
    pub fn new(hot: i32, cold: i32, hard: i32, sharp: i32, weird: i32) -> Self {
        Self {
            hot,
            cold,
            hard,
            sharp,
            weird,
        }
    }

    /// The modifier for one stat.
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Hot => self.hot,
            Stat::Cold => self.cold,
            Stat::Hard => self.hard,
            Stat::Sharp => self.sharp,
            Stat::Weird => self.weird,
        }
    }
}
