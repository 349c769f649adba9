//! Configuration for an encounter.

/// Configuration for an encounter.
#[derive(Debug, Clone)]
pub struct EncounterConfig {
    /// RNG seed for reproducible dice, facts and menus.
    pub seed: u64,
    /// How many random actions join the forced ones each turn.
    pub picks: usize,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self { seed: 42, picks: 3 }
    }
}

impl EncounterConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of random menu picks (at least one).
    pub fn with_picks(mut self, picks: usize) -> Self {
        self.picks = picks.max(1);
        self
    }
}
