//! Player and NPC records.
//!
//! Both share a [`Character`] record (name, pronouns, harm, weapon) and get
//! the [`Damageable`] and [`Armed`] capabilities through it. The NPC adds the
//! relational counters and a fact ledger; the player adds stats and the
//! supplies flag that ends the encounter peacefully.

pub mod harm;
pub mod stats;
pub mod weapon;

pub use harm::{DEFAULT_HARM_MAX, Harm};
pub use stats::{Stat, Stats};
pub use weapon::{FISTS, Weapon, WeaponKind};

use serde::{Deserialize, Serialize};

use crate::ledger::{FactHolder, FactLedger};

/// Highest tension the menu engine lets stand between turns.
pub const TENSION_CAP: i32 = 7;

/// Highest hostility the menu engine lets stand between turns.
pub const HOSTILITY_CAP: i32 = 8;

/// Subject, object and possessive pronouns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronouns {
    /// "she"
    pub subject: String,
    /// "her"
    pub object: String,
    /// "her"
    pub possessive: String,
}

impl Pronouns {
    /// Build a pronoun set.
    pub fn new(subject: &str, object: &str, possessive: &str) -> Self {
        Self {
            subject: subject.to_string(),
            object: object.to_string(),
            possessive: possessive.to_string(),
        }
    }

    /// Subject pronoun with its first letter capitalised.
    pub fn subject_capitalized(&self) -> String {
        capitalize(&self.subject)
    }
}

/// Upper-case the first character of `s`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// State shared by every character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,
    /// Pronouns used in narration.
    pub pronouns: Pronouns,
    /// Harm track.
    pub harm: Harm,
    /// Current weapon.
    pub weapon: Weapon,
}

impl Character {
    /// An unharmed, unarmed character.
    pub fn new(name: impl Into<String>, pronouns: Pronouns) -> Self {
        Self {
            name: name.into(),
            pronouns,
            harm: Harm::default(),
            weapon: Weapon::fists(),
        }
    }
}

impl AsRef<Character> for Character {
    fn as_ref(&self) -> &Character {
        self
    }
}

impl AsMut<Character> for Character {
    fn as_mut(&mut self) -> &mut Character {
        self
    }
}

/// Something that can be hurt and killed.
pub trait Damageable {
    /// The harm track.
    fn harm(&self) -> &Harm;

    /// Add harm. Returns true if this blow was the killing one.
    fn take_harm(&mut self, amount: u32) -> bool;

    /// Whether this character is dead.
    fn is_dead(&self) -> bool {
        self.harm().is_dead()
    }
}

/// Something that holds a weapon.
pub trait Armed {
    /// Current weapon.
    fn weapon(&self) -> &Weapon;

    /// Replace the current weapon.
    fn equip(&mut self, weapon: Weapon);
}

impl<T: AsRef<Character> + AsMut<Character>> Damageable for T {
    fn harm(&self) -> &Harm {
        &self.as_ref().harm
    }

    fn take_harm(&mut self, amount: u32) -> bool {
        self.as_mut().harm.take(amount)
    }
}

impl<T: AsRef<Character> + AsMut<Character>> Armed for T {
    fn weapon(&self) -> &Weapon {
        &self.as_ref().weapon
    }

    fn equip(&mut self, weapon: Weapon) {
        self.as_mut().weapon = weapon;
    }
}

/// The player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Shared character state.
    pub character: Character,
    /// Stat line.
    pub stats: Stats,
    /// Set by striking a bargain; ends the encounter.
    pub supplies: bool,
}

impl Player {
    /// Create a player.
    pub fn new(name: impl Into<String>, pronouns: Pronouns, stats: Stats) -> Self {
        Self {
            character: Character::new(name, pronouns),
            stats,
            supplies: false,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.character.name
    }
}

impl AsRef<Character> for Player {
    fn as_ref(&self) -> &Character {
        &self.character
    }
}

impl AsMut<Character> for Player {
    fn as_mut(&mut self) -> &mut Character {
        &mut self.character
    }
}

/// The character the player is negotiating with.
///
/// The relational counters have caps applied by the menu engine but no
/// floor; effects are free to drive them negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npc {
    /// Shared character state.
    pub character: Character,
    /// How volatile the scene is.
    pub tension: i32,
    /// How aggressive the NPC is.
    pub hostility: i32,
    /// How much rapport the player has built.
    pub interest: i32,
    /// What the player can find out about the NPC.
    pub facts: FactLedger,
}

impl Npc {
    /// Create an NPC with starting counters of tension 2, hostility 4, interest 0.
    pub fn new(name: impl Into<String>, pronouns: Pronouns, facts: FactLedger) -> Self {
        Self {
            character: Character::new(name, pronouns),
            tension: 2,
            hostility: 4,
            interest: 0,
            facts,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.character.name
    }

    /// Pronouns.
    pub fn pronouns(&self) -> &Pronouns {
        &self.character.pronouns
    }

    /// Pull tension and hostility back under their caps.
    pub fn cap_relations(&mut self) {
        self.tension = self.tension.min(TENSION_CAP);
        self.hostility = self.hostility.min(HOSTILITY_CAP);
    }
}

impl AsRef<Character> for Npc {
    fn as_ref(&self) -> &Character {
        &self.character
    }
}

impl AsMut<Character> for Npc {
    fn as_mut(&mut self) -> &mut Character {
        &mut self.character
    }
}

impl FactHolder for Npc {
    fn ledger(&self) -> &FactLedger {
        &self.facts
    }

    fn ledger_mut(&mut self) -> &mut FactLedger {
        &mut self.facts
    }
}

/// Which side of the standoff an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Participant {
    /// The player character.
    Player,
    /// The NPC.
    Npc,
}
