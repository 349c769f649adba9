//! Weapons and the pickup table.

use serde::{Deserialize, Serialize};

/// Name of the weapon every character starts with.
pub const FISTS: &str = "Fists";

/// What a character is holding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Display name.
    pub name: String,
    /// Harm dealt per blow.
    pub damage: u32,
}

impl Weapon {
    /// Create a weapon.
    pub fn new(name: impl Into<String>, damage: u32) -> Self {
        Self {
            name: name.into(),
            damage,
        }
    }

    /// Bare hands: deal no harm.
    pub fn fists() -> Self {
        Self::new(FISTS, 0)
    }

    /// Whether this is bare hands.
    pub fn is_unarmed(&self) -> bool {
        self.name == FISTS
    }

    /// Whether this weapon is the one `kind` hands out.
    pub fn is(&self, kind: WeaponKind) -> bool {
        self.name == kind.name()
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::fists()
    }
}

/// Weapons that can be picked up during the encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// One harm.
    Knife,
    /// Two harm.
    Axe,
    /// Three harm.
    Shotgun,
}

impl WeaponKind {
    /// Look a kind up by its lowercase tag. Unknown tags give `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "knife" => Some(Self::Knife),
            "axe" => Some(Self::Axe),
            "shotgun" => Some(Self::Shotgun),
            _ => None,
        }
    }

    /// Display name of the weapon this kind hands out.
    pub fn name(self) -> &'static str {
        match self {
            Self::Knife => "Knife",
            Self::Axe => "Axe",
            Self::Shotgun => "Shotgun",
        }
    }

    /// Harm dealt by the weapon this kind hands out.
    pub fn damage(self) -> u32 {
        match self {
            Self::Knife => 1,
            Self::Axe => 2,
            Self::Shotgun => 3,
        }
    }

    /// Build the weapon.
    pub fn weapon(self) -> Weapon {
        Weapon::new(self.name(), self.damage())
    }
}
