//! The single record holding everything an encounter mutates.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::character::{Character, Npc, Participant, Player};
use crate::content;
use crate::event::{Event, StatBlock, StatDetail};
use crate::ledger::FactLedger;
use crate::transcript::{Transcript, TranscriptEntry};

/// All mutable encounter state, owned in one place.
///
/// Every engine operation takes this record explicitly. Resetting builds a
/// new one rather than patching the old.
#[derive(Debug)]
pub struct EncounterState {
    /// The player character.
    pub player: Player,
    /// The NPC across the supplies.
    pub npc: Npc,
    /// Facts about the surroundings.
    pub scene: FactLedger,
    /// Clear visions offered by a strong Hear the Skies.
    pub clear_sight: FactLedger,
    /// Muddled visions offered by a middling Hear the Skies.
    pub confusion: FactLedger,
    /// The one random source behind dice, facts and menus.
    pub rng: StdRng,
    transcript: Transcript,
    events: Vec<Event>,
}

impl EncounterState {
    /// Build the opening state of the encounter.
    pub fn new(seed: u64) -> Self {
        let player = content::player();
        let npc = content::npc();
        let scene = content::scene(&npc);
        Self {
            player,
            scene,
            npc,
            clear_sight: content::clear_sight(),
            confusion: content::confusion(),
            rng: StdRng::seed_from_u64(seed),
            transcript: Transcript::new(),
            events: Vec::new(),
        }
    }

    /// Narrate a line.
    pub fn log(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.transcript.append(TranscriptEntry::Line(text.clone()));
        self.events.push(Event::Log(text));
    }

    /// Close the current turn.
    pub fn separator(&mut self) {
        self.transcript.append(TranscriptEntry::Separator);
        self.events.push(Event::Separator);
    }

    /// Ask for a participant's stat block to be redrawn.
    pub fn render(&mut self, who: Participant) {
        let block = self.stat_block(who);
        self.events.push(Event::Stats(block));
    }

    /// The shared character record of a participant.
    pub fn character(&self, who: Participant) -> &Character {
        match who {
            Participant::Player => &self.player.character,
            Participant::Npc => &self.npc.character,
        }
    }

    /// The shared character record of a participant, mutably.
    pub fn character_mut(&mut self, who: Participant) -> &mut Character {
        match who {
            Participant::Player => &mut self.player.character,
            Participant::Npc => &mut self.npc.character,
        }
    }

    /// Snapshot what a stat display shows for a participant.
    pub fn stat_block(&self, who: Participant) -> StatBlock {
        let character = self.character(who);
        let detail = match who {
            Participant::Player => StatDetail::Player(self.player.stats),
            Participant::Npc => StatDetail::Npc {
                tension: self.npc.tension,
            },
        };
        StatBlock {
            participant: who,
            name: character.name.clone(),
            harm_current: character.harm.current(),
            harm_max: character.harm.max(),
            weapon: character.weapon.name.clone(),
            detail,
        }
    }

    /// Everything narrated so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Take all pending events.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
