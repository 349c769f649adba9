//! Encounter engine for Standoff.
//!
//! A player faces one NPC across a box of supplies. Each turn the engine
//! offers a short menu of actions drawn from the NPC's tension, hostility
//! and interest and from what the player has learned so far; dice moves
//! resolve into hit, mixed or miss. The encounter ends in death or in a
//! bargain.
//!
//! All mutable state lives in one [`EncounterState`]. Display is left to a
//! [`Presenter`], which receives the queued [`Event`]s.

pub mod action;
pub mod availability;
pub mod character;
pub mod config;
pub mod content;
pub mod effects;
pub mod encounter;
pub mod error;
pub mod event;
pub mod ledger;
pub mod moves;
pub mod state;
pub mod transcript;

pub use action::Action;
pub use character::{Armed, Damageable, Npc, Participant, Player};
pub use config::EncounterConfig;
pub use encounter::{Encounter, EncounterStatus};
pub use error::{EncounterError, EncounterResult};
pub use event::{Event, MenuItem, Presenter, StatBlock};
pub use ledger::{Disclosure, Fact, FactHolder, FactLedger};
pub use moves::Move;
pub use state::EncounterState;
pub use transcript::{Transcript, TranscriptEntry};
