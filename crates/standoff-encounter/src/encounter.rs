//! The encounter loop.
//!
//! `Encounter` drives one standoff from the opening line to an ending:
//! render stats, offer a menu, wait for a choice, apply it, check for an
//! ending. Nothing is printed here; everything the player should see is
//! queued as an [`Event`] and handed to a [`Presenter`] on [`Encounter::flush`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::availability::compute_menu;
use crate::character::{Damageable, Participant};
use crate::config::EncounterConfig;
use crate::content;
use crate::error::{EncounterError, EncounterResult};
use crate::event::{Event, MenuItem, Presenter};
use crate::state::EncounterState;
use crate::transcript::Transcript;

/// Where the encounter stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterStatus {
    /// Still negotiating.
    InProgress,
    /// Someone died.
    Death,
    /// The player struck a bargain.
    Bargain,
}

impl EncounterStatus {
    /// Whether this is an ending.
    pub fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl std::fmt::Display for EncounterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Death => write!(f, "death"),
            Self::Bargain => write!(f, "bargain"),
        }
    }
}

/// One running encounter.
#[derive(Debug)]
pub struct Encounter {
    config: EncounterConfig,
    state: EncounterState,
    status: EncounterStatus,
    menu: Vec<Action>,
    turns: u32,
}

impl Encounter {
    /// Start a fresh encounter: narrate the opening and offer the first menu.
    pub fn new(config: EncounterConfig) -> Self {
        tracing::info!(seed = config.seed, "encounter started");
        let state = EncounterState::new(config.seed);
        Self::open(config, state)
    }

    fn open(config: EncounterConfig, state: EncounterState) -> Self {
        let mut encounter = Self {
            config,
            state,
            status: EncounterStatus::InProgress,
            menu: Vec::new(),
            turns: 0,
        };
        let intro = content::intro(&encounter.state);
        encounter.state.log(intro);
        encounter.advance();
        encounter
    }

    /// Close the turn, then either end the encounter or draw the next menu.
    fn advance(&mut self) {
        self.state.separator();
        if self.check_terminal().is_over() {
            self.menu.clear();
            return;
        }
        self.menu = compute_menu(&mut self.state, self.config.picks);
        self.state.render(Participant::Npc);
        self.state.render(Participant::Player);
    }

    /// Look for an ending and narrate its closing the first time one is found.
    ///
    /// Death takes precedence over a bargain struck in the same turn.
    pub fn check_terminal(&mut self) -> EncounterStatus {
        if self.status.is_over() {
            return self.status;
        }

        let status = if self.state.player.is_dead() || self.state.npc.is_dead() {
            EncounterStatus::Death
        } else if self.state.player.supplies {
            EncounterStatus::Bargain
        } else {
            EncounterStatus::InProgress
        };

        let closing = match status {
            EncounterStatus::InProgress => return status,
            EncounterStatus::Death => content::death_closing(&self.state),
            EncounterStatus::Bargain => content::bargain_closing(&self.state),
        };
        for line in closing {
            self.state.log(line);
        }
        self.status = status;
        self.menu.clear();
        tracing::info!(%status, turns = self.turns, "encounter over");
        status
    }

    /// Choose the menu entry at `index` and play it out.
    pub fn select(&mut self, index: usize) -> EncounterResult<EncounterStatus> {
        if self.status.is_over() {
            return Err(EncounterError::Finished);
        }
        let action = self
            .menu
            .get(index)
            .cloned()
            .ok_or(EncounterError::InvalidChoice {
                index,
                available: self.menu.len(),
            })?;

        tracing::debug!(turn = self.turns + 1, %action, "action selected");
        action.apply(&mut self.state)?;
        self.turns += 1;
        self.advance();
        Ok(self.status)
    }

    /// Draw a menu index uniformly at random from the shared random source.
    pub fn random_choice(&mut self) -> Option<usize> {
        if self.status.is_over() || self.menu.is_empty() {
            return None;
        }
        Some(self.state.rng.random_range(0..self.menu.len()))
    }

    /// Choose a random menu entry and play it out.
    pub fn select_random(&mut self) -> EncounterResult<EncounterStatus> {
        let index = self.random_choice().ok_or(EncounterError::Finished)?;
        self.select(index)
    }

    /// Throw the whole encounter away and start over.
    ///
    /// The new seed comes from the current random source, so a session with
    /// resets replays identically from the configured seed.
    pub fn reset(&mut self) {
        let seed: u64 = self.state.rng.random();
        tracing::info!(seed, "encounter reset");
        *self = Self::open(self.config.clone(), EncounterState::new(seed));
    }

    /// Deliver pending events in order, then the menu if the encounter goes on.
    pub fn flush(&mut self, presenter: &mut dyn Presenter) {
        for event in self.state.drain_events() {
            match event {
                Event::Log(text) => presenter.append_log(&text),
                Event::Stats(block) => presenter.render_stats(&block),
                Event::Separator => presenter.separator(),
            }
        }
        if !self.status.is_over() {
            presenter.present_menu(&self.menu());
        }
        presenter.finish();
    }

    /// The current menu with its labels.
    pub fn menu(&self) -> Vec<MenuItem> {
        self.menu
            .iter()
            .map(|action| MenuItem {
                action: action.clone(),
                label: action.label(&self.state),
            })
            .collect()
    }

    /// The current menu's actions.
    pub fn actions(&self) -> &[Action] {
        &self.menu
    }

    /// Where the encounter stands.
    pub fn status(&self) -> EncounterStatus {
        self.status
    }

    /// Number of actions taken so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The configuration this encounter was started with.
    pub fn config(&self) -> &EncounterConfig {
        &self.config
    }

    /// The full encounter state.
    pub fn state(&self) -> &EncounterState {
        &self.state
    }

    /// The full encounter state, mutably. Changes take effect on the next
    /// terminal check or menu.
    pub fn state_mut(&mut self) -> &mut EncounterState {
        &mut self.state
    }

    /// Everything narrated so far.
    pub fn transcript(&self) -> &Transcript {
        self.state.transcript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::candidate_pool;
    use crate::character::{Armed, WeaponKind};
    use crate::effects::{deal_harm, escalate};
    use crate::event::StatBlock;

    fn encounter(seed: u64) -> Encounter {
        Encounter::new(EncounterConfig::default().with_seed(seed))
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        menus: Vec<Vec<MenuItem>>,
    }

    impl Presenter for Recorder {
        fn render_stats(&mut self, block: &StatBlock) {
            self.calls.push(format!("stats {}", block.name));
        }

        fn append_log(&mut self, text: &str) {
            self.calls.push(format!("log {text}"));
        }

        fn separator(&mut self) {
            self.calls.push("separator".to_string());
        }

        fn present_menu(&mut self, items: &[MenuItem]) {
            self.calls.push("menu".to_string());
            self.menus.push(items.to_vec());
        }
    }

    #[test]
    fn opening_turn() {
        let e = encounter(3);
        assert_eq!(e.status(), EncounterStatus::InProgress);
        assert_eq!(e.turns(), 0);
        let first = e.transcript().lines().next().unwrap_or_default();
        assert!(first.starts_with("Hooksnap glares down at you"));

        let pool = candidate_pool(e.state());
        assert!(pool.contains(&Action::ReadPerson));
        assert!(pool.contains(&Action::ReadSitch));
        assert_eq!(e.actions()[0], Action::BashHeads);
        assert_eq!(e.actions().len(), 4);
    }

    #[test]
    fn flush_delivers_in_order() {
        let mut e = encounter(3);
        let mut rec = Recorder::default();
        e.flush(&mut rec);
        assert!(rec.calls[0].starts_with("log Hooksnap glares"));
        assert_eq!(
            rec.calls[1..],
            ["separator", "stats Hooksnap", "stats Shiner", "menu"]
        );
        assert_eq!(rec.menus[0][0].label, "Bring violence (Bash Heads +hard)");

        let mut again = Recorder::default();
        e.flush(&mut again);
        assert_eq!(again.calls, ["menu"]);
    }

    #[test]
    fn escalation_arms_npc() {
        let mut e = encounter(4);
        let state = e.state_mut();
        state.npc.tension = 1;
        escalate(state, 3);
        assert_eq!(state.npc.tension, 4);
        assert!(state.npc.weapon().is(WeaponKind::Axe));
        assert!(state.player.weapon().is_unarmed());
    }

    #[test]
    fn lethal_harm_ends_in_death() {
        let mut e = encounter(5);
        assert!(deal_harm(e.state_mut(), Participant::Player, 4));
        assert_eq!(e.state().player.harm().current(), 4);
        assert_eq!(e.check_terminal(), EncounterStatus::Death);
        assert!(e.actions().is_empty());
        assert!(
            e.transcript()
                .lines()
                .any(|l| l.starts_with("Darkness overtakes you"))
        );
        assert!(matches!(e.select(0), Err(EncounterError::Finished)));
    }

    #[test]
    fn bargain_closing_is_narrated_once() {
        let mut e = encounter(6);
        e.state_mut().player.supplies = true;
        assert_eq!(e.check_terminal(), EncounterStatus::Bargain);
        assert_eq!(e.check_terminal(), EncounterStatus::Bargain);
        let closings = e
            .transcript()
            .lines()
            .filter(|l| l.starts_with("You strike up a bargain"))
            .count();
        assert_eq!(closings, 1);
    }

    #[test]
    fn choosing_bargain_from_the_menu() {
        let mut e = encounter(7);
        e.state_mut().npc.hostility = 0;
        e.state_mut().npc.interest = 2;
        e.advance();
        assert_eq!(e.actions()[0], Action::Bargain);
        assert_eq!(e.select(0).unwrap(), EncounterStatus::Bargain);
        assert_eq!(e.turns(), 1);

        let mut rec = Recorder::default();
        e.flush(&mut rec);
        assert!(rec.menus.is_empty());
        let last = rec.calls.last().cloned().unwrap_or_default();
        assert!(last.starts_with("log You strike up a bargain with Hooksnap"));
    }

    #[test]
    fn invalid_choice() {
        let mut e = encounter(8);
        let err = e.select(9).unwrap_err();
        assert!(matches!(
            err,
            EncounterError::InvalidChoice {
                index: 9,
                available: 4
            }
        ));
        assert_eq!(e.turns(), 0);
    }

    #[test]
    fn failed_action_does_not_count_a_turn() {
        let mut e = encounter(8);
        e.menu.push(Action::Keyword("dragon".to_string()));
        let last = e.actions().len() - 1;
        let err = e.select(last).unwrap_err();
        assert!(matches!(err, EncounterError::UnknownAction(w) if w == "dragon"));
        assert_eq!(e.turns(), 0);
        assert_eq!(e.status(), EncounterStatus::InProgress);
    }

    #[test]
    fn same_seed_same_story() {
        let mut a = encounter(1234);
        let mut b = encounter(1234);
        for _ in 0..8 {
            if a.status().is_over() {
                break;
            }
            assert_eq!(a.select_random().unwrap(), b.select_random().unwrap());
        }
        assert_eq!(a.transcript(), b.transcript());
    }

    #[test]
    fn reset_starts_over() {
        let mut e = encounter(9);
        e.select(0).unwrap();
        e.state_mut().npc.tension = 6;
        e.reset();
        assert_eq!(e.status(), EncounterStatus::InProgress);
        assert_eq!(e.turns(), 0);
        assert_eq!(e.state().npc.tension, 2);
        assert_eq!(e.transcript().lines().count(), 1);
        assert_eq!(e.config().seed, 9);
    }

    #[test]
    fn resets_replay_from_the_seed() {
        let mut a = encounter(77);
        let mut b = encounter(77);
        a.reset();
        b.reset();
        assert_eq!(a.actions(), b.actions());
        assert_eq!(a.transcript(), b.transcript());
    }
}
