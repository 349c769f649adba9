//! What the engine tells the presentation layer, and the trait that listens.

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::character::{Participant, Stats};

/// Something the presentation layer should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A line of narration for the transcript.
    Log(String),
    /// A participant's stat block changed and should be redrawn.
    Stats(StatBlock),
    /// A turn has finished.
    Separator,
}

/// Per-participant details beyond harm and weapon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatDetail {
    /// The player's stat line.
    Player(Stats),
    /// The NPC's current tension.
    Npc {
        /// Tension at render time.
        tension: i32,
    },
}

/// Everything a stat display needs about one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    /// Whose block this is.
    pub participant: Participant,
    /// Display name.
    pub name: String,
    /// Harm taken.
    pub harm_current: u32,
    /// Harm at which they die.
    pub harm_max: u32,
    /// Name of the current weapon.
    pub weapon: String,
    /// Stats or tension.
    pub detail: StatDetail,
}

const TENSION_WORDS: [&str; 6] = [
    "calm",
    "strained",
    "tense",
    "charged",
    "volatile",
    "chaotic",
];

impl StatBlock {
    /// "Hooksnap -- 1/4 Harm"
    pub fn headline(&self) -> String {
        format!("{} -- {}/{} Harm", self.name, self.harm_current, self.harm_max)
    }

    /// "Armed with Fists" or "Armed with the Axe".
    pub fn armed_line(&self) -> String {
        if self.weapon == crate::character::FISTS {
            format!("Armed with {}", self.weapon)
        } else {
            format!("Armed with the {}", self.weapon)
        }
    }

    /// How the scene feels, for NPC blocks. Anything above 5 reads as chaotic.
    pub fn tension_line(&self) -> Option<String> {
        match self.detail {
            StatDetail::Npc { tension } => {
                let index = tension.clamp(0, TENSION_WORDS.len() as i32 - 1) as usize;
                Some(format!("The situation is {}.", TENSION_WORDS[index]))
            }
            StatDetail::Player(_) => None,
        }
    }
}

/// One selectable entry in the action menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// The action taken when this entry is chosen.
    pub action: Action,
    /// Text shown to the player.
    pub label: String,
}

/// The presentation adapter the encounter reports to.
pub trait Presenter {
    /// Redraw a participant's stat block.
    fn render_stats(&mut self, block: &StatBlock);

    /// Add a line of narration. The transcript reads most-recent-first.
    fn append_log(&mut self, text: &str);

    /// Mark the end of a turn.
    fn separator(&mut self);

    /// Offer the next set of actions. Exactly one should be chosen.
    fn present_menu(&mut self, items: &[MenuItem]);

    /// Called once all pending events of a flush have been delivered.
    fn finish(&mut self) {}
}
