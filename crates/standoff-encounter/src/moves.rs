//! Player moves: a stat roll that branches into hit, mixed or miss.

use standoff_mechanics::{Band, MoveRoll, roll_move};

use crate::character::Stat;
use crate::state::EncounterState;

/// A script run against the encounter state.
pub type Effect = fn(&mut EncounterState);

/// A named, stat-gated move with one effect per band.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    /// Name shown in menus and the transcript.
    pub name: &'static str,
    /// Stat added to the roll.
    pub stat: Stat,
    /// Run on 10 or more.
    pub on_hit: Effect,
    /// Run on 7 to 9.
    pub on_mixed: Effect,
    /// Run on 6 or less.
    pub on_miss: Effect,
}

impl Move {
    /// Roll with the player's stat and run the matching branch.
    ///
    /// The header line is narrated last so that it sits on top of the
    /// branch's own lines when the transcript is read newest first.
    pub fn execute(&self, state: &mut EncounterState) -> MoveRoll {
        let modifier = state.player.stats.get(self.stat);
        let roll = roll_move(&mut state.rng, modifier);
        state.log(format!(
            "Rolled {} for a total of {}",
            roll.raw(),
            roll.total()
        ));

        let effect = match roll.band() {
            Band::Miss => self.on_miss,
            Band::Mixed => self.on_mixed,
            Band::Hit => self.on_hit,
        };
        effect(state);

        state.log(format!("Making the move {} with +{}...", self.name, self.stat));
        roll
    }
}
