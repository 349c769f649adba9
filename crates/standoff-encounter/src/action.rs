//! Menu actions and what choosing them does.

use serde::{Deserialize, Serialize};

use crate::character::Participant;
use crate::content;
use crate::effects::{escalate, grab_weapon};
use crate::error::{EncounterError, EncounterResult};
use crate::moves::Move;
use crate::state::EncounterState;

/// Anything that can appear in the action menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Bash Heads (+hard).
    BashHeads,
    /// Read a Person (+sharp).
    ReadPerson,
    /// Read the Situation (+sharp).
    ReadSitch,
    /// Ice Down (+cold).
    IceDown,
    /// Spark Up (+hot).
    SparkUp,
    /// Hear the Skies (+weird).
    HearSkies,
    /// Draw a knife, raising tension.
    GrabKnife,
    /// Accept the supplies deal and end the encounter.
    Bargain,
    /// An action unlocked by a known fact's keyword.
    Keyword(String),
}

impl Action {
    /// Stable identifier, e.g. `"readPerson"` or the fact keyword.
    pub fn id(&self) -> &str {
        match self {
            Self::BashHeads => "bashHeads",
            Self::ReadPerson => "readPerson",
            Self::ReadSitch => "readSitch",
            Self::IceDown => "iceDown",
            Self::SparkUp => "sparkUp",
            Self::HearSkies => "hearSkies",
            Self::GrabKnife => "grabKnife",
            Self::Bargain => "bargain",
            Self::Keyword(word) => word,
        }
    }

    /// Parse an identifier. Anything unrecognised is taken as a keyword.
    pub fn from_id(id: &str) -> Self {
        match id {
            "bashHeads" => Self::BashHeads,
            "readPerson" => Self::ReadPerson,
            "readSitch" => Self::ReadSitch,
            "iceDown" => Self::IceDown,
            "sparkUp" => Self::SparkUp,
            "hearSkies" => Self::HearSkies,
            "grabKnife" => Self::GrabKnife,
            "bargain" => Self::Bargain,
            other => Self::Keyword(other.to_string()),
        }
    }

    /// The dice move behind this action, if it is one.
    pub fn as_move(&self) -> Option<&'static Move> {
        match self {
            Self::BashHeads => Some(&content::BASH_HEADS),
            Self::ReadPerson => Some(&content::READ_PERSON),
            Self::ReadSitch => Some(&content::READ_SITCH),
            Self::IceDown => Some(&content::ICE_DOWN),
            Self::SparkUp => Some(&content::SPARK_UP),
            Self::HearSkies => Some(&content::HEAR_SKIES),
            Self::GrabKnife | Self::Bargain | Self::Keyword(_) => None,
        }
    }

    /// Menu text, e.g. `"Bring violence (Bash Heads +hard)"`.
    pub fn label(&self, state: &EncounterState) -> String {
        let text = match self {
            Self::Keyword(word) => content::keyword_action(word)
                .map(|k| (k.label)(state))
                .unwrap_or_else(|| word.clone()),
            other => content::action_label(other, state),
        };
        match self.as_move() {
            Some(mv) => format!("{text} ({} +{})", mv.name, mv.stat),
            None => text,
        }
    }

    /// Carry out the action.
    pub fn apply(&self, state: &mut EncounterState) -> EncounterResult<()> {
        if let Some(mv) = self.as_move() {
            mv.execute(state);
            return Ok(());
        }
        match self {
            Self::GrabKnife => {
                escalate(state, 2);
                grab_weapon(state, Participant::Player, "knife");
            }
            Self::Bargain => {
                state.player.supplies = true;
            }
            Self::Keyword(word) => {
                let action = content::keyword_action(word)
                    .ok_or_else(|| EncounterError::UnknownAction(word.clone()))?;
                (action.effect)(state);
            }
            _ => {}
        }
        Ok(())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
