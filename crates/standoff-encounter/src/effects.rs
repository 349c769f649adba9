//! Mutations shared by moves and actions: harm, weapons, escalation.

use crate::character::{Armed, Damageable, Participant, TENSION_CAP, WeaponKind};
use crate::state::EncounterState;

/// Tension at which an unarmed NPC reaches for an axe.
pub const ARMING_TENSION: i32 = 4;

/// Deal `amount` harm to `target`. Returns true if the blow killed them.
pub fn deal_harm(state: &mut EncounterState, target: Participant, amount: u32) -> bool {
    let name = state.character(target).name.clone();
    state.log(format!("{name} takes {amount} Harm!"));

    let killed = state.character_mut(target).take_harm(amount);
    if killed {
        tracing::info!(%name, "participant killed");
    }

    state.render(target);
    killed
}

/// Have `who` pick up the weapon tagged `kind`.
///
/// The grab is narrated either way; an unknown tag leaves the weapon as is.
pub fn grab_weapon(state: &mut EncounterState, who: Participant, kind: &str) {
    let character = state.character(who);
    let line = format!(
        "{} grabs {} {kind}.",
        character.name, character.pronouns.possessive
    );
    state.log(line);

    match WeaponKind::parse(kind) {
        Some(kind) => state.character_mut(who).equip(kind.weapon()),
        None => tracing::debug!(kind, "unknown weapon kind, nothing equipped"),
    }

    state.render(who);
}

/// Raise tension by `amount`, or lash out if it is already at the cap.
pub fn escalate(state: &mut EncounterState, amount: i32) {
    if state.npc.tension >= TENSION_CAP {
        let damage = state.npc.weapon().damage;
        deal_harm(state, Participant::Player, damage);
        let line = format!("{} lashes out!", state.npc.name());
        state.log(line);
        return;
    }

    let line = format!(
        "The tension grows. What does {} do?",
        state.player.name()
    );
    state.log(line);
    state.npc.tension += amount;
    tracing::debug!(tension = state.npc.tension, "escalated");

    if state.npc.weapon().is_unarmed() && state.npc.tension >= ARMING_TENSION {
        let line = format!(
            "{} settles into a fighting stance, in response.",
            state.npc.name()
        );
        state.log(line);
        grab_weapon(state, Participant::Npc, "axe");
    }
}
