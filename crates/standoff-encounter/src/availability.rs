//! Works out which actions to offer each turn.
//!
//! Relational thresholds and fact disclosure decide which actions are legal.
//! Bash Heads and Bargain jump the queue whenever they are eligible; the rest
//! of the menu is drawn at random from what remains.

use rand::Rng;

use crate::action::Action;
use crate::character::{Armed, WeaponKind};
use crate::content;
use crate::ledger::FactLedger;
use crate::state::EncounterState;

/// Actions that are always offered when eligible.
pub fn forced_actions(state: &EncounterState) -> Vec<Action> {
    let npc = &state.npc;
    let mut forced = Vec::new();
    if npc.hostility >= 1 && npc.tension > 0 {
        forced.push(Action::BashHeads);
    }
    if npc.hostility < 1 && npc.interest >= 2 {
        forced.push(Action::Bargain);
    }
    forced
}

/// Every other action that is currently legal, in a fixed order.
pub fn candidate_pool(state: &EncounterState) -> Vec<Action> {
    let npc = &state.npc;
    let mut pool = Vec::new();

    if npc.tension >= 1 {
        pool.push(Action::ReadPerson);
        pool.push(Action::ReadSitch);
    }
    if npc.hostility < 5 && npc.tension > 0 {
        pool.push(Action::IceDown);
    }
    if npc.hostility >= 3 && !state.player.weapon().is(WeaponKind::Knife) {
        pool.push(Action::GrabKnife);
    }
    pool.push(Action::SparkUp);
    pool.push(Action::HearSkies);

    push_keyword_actions(&mut pool, &npc.facts, npc.tension);
    push_keyword_actions(&mut pool, &state.scene, npc.tension);
    pool
}

/// Add keyword actions unlocked by known facts in `ledger`.
///
/// Each fact is judged by its own disclosure state. A keyword is skipped when
/// it has no registered action, its action is suppressed at the current
/// tension, or the pool already offers it.
fn push_keyword_actions(pool: &mut Vec<Action>, ledger: &FactLedger, tension: i32) {
    for word in ledger.known_keywords() {
        let Some(keyword) = content::keyword_action(word) else {
            tracing::debug!(keyword = %word, "keyword has no action");
            continue;
        };
        if keyword.suppressed_above.is_some_and(|limit| tension > limit) {
            continue;
        }
        let action = Action::Keyword(word.to_string());
        if !pool.contains(&action) {
            pool.push(action);
        }
    }
}

/// Build the next menu: forced actions first, then up to `picks` random ones.
///
/// Tension and hostility are capped before anything is computed; that cap
/// sticks.
pub fn compute_menu(state: &mut EncounterState, picks: usize) -> Vec<Action> {
    state.npc.cap_relations();

    let mut menu = forced_actions(state);
    let mut pool = candidate_pool(state);
    tracing::debug!(
        forced = ?menu.iter().map(Action::id).collect::<Vec<_>>(),
        pool = ?pool.iter().map(Action::id).collect::<Vec<_>>(),
        "menu candidates"
    );

    for _ in 0..picks {
        if pool.is_empty() {
            break;
        }
        let index = state.rng.random_range(0..pool.len());
        menu.push(pool.remove(index));
    }
    menu
}
