//! The scene itself: who is there, what can be learned, and how each move
//! plays out. Everything here is data for the engine modules to run.

use rand::Rng;
use rand::rngs::StdRng;

use crate::action::Action;
use crate::character::{Npc, Participant, Player, Pronouns, Stat, Stats, capitalize};
use crate::effects::{deal_harm, escalate, grab_weapon};
use crate::ledger::{self, Disclosure, FactLedger};
use crate::moves::{Effect, Move};
use crate::state::EncounterState;

/// The NPC guarding the supplies.
pub const NPC_NAME: &str = "Hooksnap";

/// The player character.
pub const PLAYER_NAME: &str = "Shiner";

const HARM_DESCRIPTIONS: [&str; 4] = [
    "completely unscathed",
    "injured yet whole",
    "seriously wounded",
    "barely alive",
];

const PORTENTS: [&str; 3] = [
    "A cloud of dust kicks up on the horizon. Raiders on their way to the village before too long.",
    "The howl of a genbeast shivers through the air, somewhere not here.",
    "You feel a prickling behind your temples, where a sensation of minute but worrisome pain trembles.",
];

/// Shiner: hot 1, cold 1, hard 2, sharp 0, weird -1.
pub fn player() -> Player {
    Player::new(
        PLAYER_NAME,
        Pronouns::new("he", "him", "his"),
        Stats::new(1, 1, 2, 0, -1),
    )
}

/// Hooksnap and what there is to learn about her.
pub fn npc() -> Npc {
    let pronouns = Pronouns::new("she", "her", "her");
    let name = NPC_NAME;
    let facts = [
        (
            format!(
                "You notice {name} is unusually protective of the supplies; this isn't just practical, it's personal."
            ),
            "personal",
        ),
        (
            format!("{name} is eyeing you with suspicion, focusing on your owl shoulder patch."),
            "owl",
        ),
        (
            format!(
                "There's a faint star-shaped scar on {name}'s temple; it's not irregular enough to be natural--it's a brand."
            ),
            "star",
        ),
        (
            format!(
                "The axe at {name}'s side is sharp, and also engraved with the inscription \"Pride of the Green\"."
            ),
            "inscription",
        ),
        (
            format!(
                "{name} eyes you with concern. {} would avoid violence if possible.",
                pronouns.subject_capitalized()
            ),
            "violence",
        ),
    ];
    let ledger = FactLedger::with_facts(
        name,
        facts.iter().map(|(text, key)| (text.as_str(), Some(*key))),
    );
    Npc::new(name, pronouns, ledger)
}

/// The hills around the standoff.
pub fn scene(npc: &Npc) -> FactLedger {
    let alone = format!(
        "You don't see anyone else around to back {} up. {} stands alone.",
        npc.name(),
        npc.pronouns().subject_capitalized()
    );
    FactLedger::with_facts(
        "The poisoned hills",
        [
            ("There is a shotgun behind one of the crates.", Some("shotgun")),
            (alone.as_str(), Some("alone")),
        ],
    )
}

/// Visions on a strong Hear the Skies.
pub fn clear_sight() -> FactLedger {
    FactLedger::with_facts(
        "The ambient strangeness",
        [
            ("Lush and green, a future, understanding will come.", None),
            ("The way of peace aids compatibility.", None),
            ("A star will spark interest.", None),
        ],
    )
}

/// Visions on a middling Hear the Skies.
pub fn confusion() -> FactLedger {
    FactLedger::with_facts(
        "A void of ambient chaos",
        [
            ("The bird, talons stained by blood.", None),
            ("An instrument of death hanging over all.", None),
            ("Isolation. A flame burns alone.", None),
        ],
    )
}

/// Opening narration.
pub fn intro(state: &EncounterState) -> String {
    let npc = &state.npc;
    format!(
        "{} glares down at you, one foot on the box of supplies. {} grunts, \"No deal. You don't have anything I want.\" What does {} do?",
        npc.name(),
        npc.pronouns().subject_capitalized(),
        state.player.name()
    )
}

/// A bad sign of things to come.
pub fn portent(rng: &mut StdRng) -> &'static str {
    PORTENTS[rng.random_range(0..PORTENTS.len())]
}

/// Closing lines when someone has died, in narration order.
pub fn death_closing(state: &EncounterState) -> Vec<String> {
    let mut lines = vec!["Death visits this valley. Reset to play again.".to_string()];
    let player = &state.player.character;
    if player.harm.is_dead() {
        lines.push(
            "Darkness overtakes you, as you bleed out for the supplies you wanted so desperately."
                .to_string(),
        );
    } else {
        let index = (player.harm.current() as usize).min(HARM_DESCRIPTIONS.len() - 1);
        lines.push(format!(
            "You made it out, {}; the supplies are yours, at the low price of blood.",
            HARM_DESCRIPTIONS[index]
        ));
    }
    if state.npc.character.harm.is_dead() {
        lines.push(format!(
            "{} falls to {} knees, unable to stand. Violence has won out today.",
            state.npc.name(),
            state.npc.pronouns().possessive
        ));
    }
    lines
}

/// Closing lines for the peaceful ending, in narration order.
pub fn bargain_closing(state: &EncounterState) -> Vec<String> {
    let npc = &state.npc;
    vec![
        "Reset to play again.".to_string(),
        format!(
            "You strike up a bargain with {}: you get some of the supplies, and {} gets your services protecting {} enclave during the next month. Life continues for another day.",
            npc.name(),
            npc.pronouns().subject,
            npc.pronouns().object
        ),
    ]
}

/// Menu text for the built-in actions.
pub fn action_label(action: &Action, state: &EncounterState) -> String {
    match action {
        Action::BashHeads => "Bring violence".to_string(),
        Action::ReadPerson => format!("Size up {}", state.npc.name()),
        Action::ReadSitch => format!("Check {}.", state.scene.name().to_lowercase()),
        Action::IceDown => "Cool the tension.".to_string(),
        Action::SparkUp => "Spark a connection.".to_string(),
        Action::HearSkies => "Listen to the skies within.".to_string(),
        Action::GrabKnife => "Grab your knife".to_string(),
        Action::Bargain => "Strike a bargain".to_string(),
        Action::Keyword(word) => word.clone(),
    }
}

fn log_all(state: &mut EncounterState, lines: Vec<String>) {
    for line in lines {
        state.log(line);
    }
}

// Bash Heads

fn bash_hit(state: &mut EncounterState) {
    let damage = state.player.character.weapon.damage;
    deal_harm(state, Participant::Npc, damage);
}

fn bash_mixed(state: &mut EncounterState) {
    let dealt = state.player.character.weapon.damage;
    let taken = state.npc.character.weapon.damage;
    deal_harm(state, Participant::Npc, dealt);
    deal_harm(state, Participant::Player, taken);
    state.log("You both trade blows.");
    state.npc.tension += 1;
}

fn bash_miss(state: &mut EncounterState) {
    let taken = state.npc.character.weapon.damage;
    deal_harm(state, Participant::Player, taken);
    state.npc.tension += 1;
}

// Read a Person

fn read_person_hit(state: &mut EncounterState) {
    let facts = ledger::reveal(3, &mut state.npc, &mut state.rng);
    log_all(state, facts);
}

fn read_person_mixed(state: &mut EncounterState) {
    if state.rng.random_range(1..=3) > 2 {
        escalate(state, 1);
    }
    let line = format!("{} doesn't like your prying.", state.npc.name());
    state.log(line);
    let facts = ledger::reveal(1, &mut state.npc, &mut state.rng);
    log_all(state, facts);
}

fn read_person_miss(state: &mut EncounterState) {
    escalate(state, 1);
    let line = format!("{} lets nothing slip.", state.npc.name());
    state.log(line);
}

// Read the Situation

fn read_sitch_hit(state: &mut EncounterState) {
    let facts = state.scene.reveal(3, &mut state.rng);
    log_all(state, facts);
}

fn read_sitch_mixed(state: &mut EncounterState) {
    let facts = state.scene.reveal(1, &mut state.rng);
    log_all(state, facts);
}

fn read_sitch_miss(state: &mut EncounterState) {
    let line = portent(&mut state.rng);
    state.log(line);
}

// Ice Down

fn ice_down_hit(state: &mut EncounterState) {
    state.npc.tension -= 2;
    state.npc.hostility -= 1;
    state.log("The tension settles a bit.");
}

fn ice_down_mixed(state: &mut EncounterState) {
    state.npc.tension -= 2;
    state.npc.hostility += 1;
    let line = format!(
        "The tension settles, but {} looks at you with increased suspicion.",
        state.npc.name()
    );
    state.log(line);
}

fn ice_down_miss(state: &mut EncounterState) {
    state.npc.hostility += 1;
    let line = format!("{} eyes you with more wariness.", state.npc.name());
    state.log(line);
}

// Spark Up

fn spark_up_hit(state: &mut EncounterState) {
    state.npc.interest += 1;
    state.npc.hostility -= 1;
    state.npc.tension += 1;
    let line = format!(
        "You catch {}'s attention, and {} studies you with more focused intent.",
        state.npc.name(),
        state.npc.pronouns().subject
    );
    state.log(line);
}

fn spark_up_mixed(state: &mut EncounterState) {
    state.npc.hostility -= 1;
    state.npc.tension += 1;
    state.log("The connection between you intensifies.");
}

fn spark_up_miss(state: &mut EncounterState) {
    state.npc.tension += 1;
    state.npc.hostility += 1;
    let line = format!(
        "{} views your attempts to connect with grave suspicion.",
        state.npc.pronouns().subject_capitalized()
    );
    state.log(line);
}

// Hear the Skies

fn hear_skies_hit(state: &mut EncounterState) {
    let visions = state.clear_sight.reveal(1, &mut state.rng);
    log_all(state, visions);
    let line = format!(
        "{} opens above your mind, and you feel a moment in your mind's eye.",
        state.clear_sight.name()
    );
    state.log(line);
    state.npc.tension -= 1;
}

fn hear_skies_mixed(state: &mut EncounterState) {
    let visions = state.confusion.reveal(1, &mut state.rng);
    log_all(state, visions);
    let line = format!(
        "{} boils within your heart; nothing you feel is clear.",
        state.confusion.name()
    );
    state.log(line);
}

fn hear_skies_miss(state: &mut EncounterState) {
    let line = portent(&mut state.rng);
    state.log(line);
    state.log("You see a dread portent in your mind's eye.");
}

/// Bash Heads: trade violence.
pub const BASH_HEADS: Move = Move {
    name: "Bash Heads",
    stat: Stat::Hard,
    on_hit: bash_hit,
    on_mixed: bash_mixed,
    on_miss: bash_miss,
};

/// Read a Person: learn about the NPC.
pub const READ_PERSON: Move = Move {
    name: "Read a Person",
    stat: Stat::Sharp,
    on_hit: read_person_hit,
    on_mixed: read_person_mixed,
    on_miss: read_person_miss,
};

/// Read the Situation: learn about the scene.
pub const READ_SITCH: Move = Move {
    name: "Read the Situation",
    stat: Stat::Sharp,
    on_hit: read_sitch_hit,
    on_mixed: read_sitch_mixed,
    on_miss: read_sitch_miss,
};

/// Ice Down: lower the tension.
pub const ICE_DOWN: Move = Move {
    name: "Ice Down",
    stat: Stat::Cold,
    on_hit: ice_down_hit,
    on_mixed: ice_down_mixed,
    on_miss: ice_down_miss,
};

/// Spark Up: build rapport.
pub const SPARK_UP: Move = Move {
    name: "Spark Up",
    stat: Stat::Hot,
    on_hit: spark_up_hit,
    on_mixed: spark_up_mixed,
    on_miss: spark_up_miss,
};

/// Hear the Skies: open up to the strangeness.
pub const HEAR_SKIES: Move = Move {
    name: "Hear the Skies",
    stat: Stat::Weird,
    on_hit: hear_skies_hit,
    on_mixed: hear_skies_mixed,
    on_miss: hear_skies_miss,
};

/// An action unlocked by a known fact.
#[derive(Debug, Clone, Copy)]
pub struct KeywordAction {
    /// Keyword of the fact that unlocks it.
    pub keyword: &'static str,
    /// Not offered while tension is above this.
    pub suppressed_above: Option<i32>,
    /// Menu text.
    pub label: fn(&EncounterState) -> String,
    /// What choosing it does.
    pub effect: Effect,
}

/// Look up the action registered for a fact keyword.
pub fn keyword_action(keyword: &str) -> Option<&'static KeywordAction> {
    KEYWORD_ACTIONS.iter().find(|k| k.keyword == keyword)
}

static KEYWORD_ACTIONS: [KeywordAction; 7] = [
    KeywordAction {
        keyword: "shotgun",
        suppressed_above: Some(4),
        label: |_| "Go for the shotgun".to_string(),
        effect: go_for_shotgun,
    },
    KeywordAction {
        keyword: "alone",
        suppressed_above: None,
        label: |s| format!("Point out that {} stands alone", s.npc.pronouns().subject),
        effect: point_out_alone,
    },
    KeywordAction {
        keyword: "personal",
        suppressed_above: None,
        label: |s| format!("Ask what {} personal stake is", s.npc.pronouns().object),
        effect: ask_personal_stake,
    },
    KeywordAction {
        keyword: "owl",
        suppressed_above: None,
        label: |_| "Explain your loose affiliation with Athena".to_string(),
        effect: explain_affiliation,
    },
    KeywordAction {
        keyword: "star",
        suppressed_above: None,
        label: |_| "Ask about the brand".to_string(),
        effect: ask_about_brand,
    },
    KeywordAction {
        keyword: "inscription",
        suppressed_above: None,
        label: |_| "Ask about the Green".to_string(),
        effect: ask_about_green,
    },
    KeywordAction {
        keyword: "violence",
        suppressed_above: Some(4),
        label: |_| "Suggest peace".to_string(),
        effect: suggest_peace,
    },
];

fn go_for_shotgun(state: &mut EncounterState) {
    escalate(state, 4);
    grab_weapon(state, Participant::Player, "shotgun");
    let line = format!(
        "{} wasn't keeping enough of an eye on you. You quickly close the distance to the shotgun.",
        state.npc.name()
    );
    state.log(line);
    state.scene.advance("shotgun", Disclosure::Used);
}

fn point_out_alone(state: &mut EncounterState) {
    let pronouns = state.npc.pronouns().clone();
    let line = format!(
        "You nod at the empty hills. Nobody is coming to help {}, and {} knows it.",
        pronouns.object, pronouns.subject
    );
    state.log(line);
    state.scene.advance("alone", Disclosure::Used);
}

fn ask_personal_stake(state: &mut EncounterState) {
    let pronouns = state.npc.pronouns().clone();
    let line = format!(
        "In the dim light, {} eyes open. Looking back at you, {} cryptically explains, \"It's the Green.\"",
        pronouns.object, pronouns.subject
    );
    state.log(line);
    state.npc.facts.advance("inscription", Disclosure::Known);
    state.npc.facts.advance("personal", Disclosure::Used);
}

fn explain_affiliation(state: &mut EncounterState) {
    let pronouns = state.npc.pronouns().clone();
    let line = format!(
        "You explain that you aren't strictly loyal to Athena, but wear the gang's patch to benefit from their reputation. {} doesn't like it, but understands. Briefly, {} touches a star-shaped brand on {} face.",
        capitalize(&pronouns.subject),
        pronouns.subject,
        pronouns.object
    );
    state.log(line);
    state.npc.facts.advance("star", Disclosure::Known);
    state.npc.tension += 1;
    state.npc.facts.advance("owl", Disclosure::Used);
}

fn ask_about_brand(state: &mut EncounterState) {
    let pronouns = state.npc.pronouns().clone();
    let line = format!(
        "{} starts. \"Nothing of your concern. The past is the past.\" However, {} seems glad you noticed {} scar.",
        capitalize(&pronouns.subject),
        pronouns.subject,
        pronouns.object
    );
    state.log(line);
    state.npc.tension += 1;
    state.npc.interest += 1;
    state.npc.hostility -= 1;
    state.npc.facts.advance("star", Disclosure::Used);
}

fn ask_about_green(state: &mut EncounterState) {
    let line = format!(
        "{} nods; {} lets out a breath and gives a brief explanation. \"The Green is a way of life. A hope in a miracle, a plan to begin to rebuild this world. We won't let anyone stop it.\"",
        state.npc.name(),
        state.npc.pronouns().subject
    );
    state.log(line);
    state.npc.hostility -= 2;
    state.npc.facts.advance("inscription", Disclosure::Used);
}

fn suggest_peace(state: &mut EncounterState) {
    let pronouns = state.npc.pronouns().clone();
    let line = format!(
        "You see {} desire for peace, and appeal to it; {} acknowledges it but doesn't back down.",
        pronouns.possessive, pronouns.subject
    );
    state.log(line);
    state.npc.hostility -= 2;
    state.npc.facts.advance("violence", Disclosure::Used);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Armed, Damageable, WeaponKind};

    fn state() -> EncounterState {
        EncounterState::new(5)
    }

    #[test]
    fn npc_facts_are_keyed() {
        let n = npc();
        let keys: Vec<_> = n.facts.keywords().flatten().collect();
        assert_eq!(keys, ["personal", "owl", "star", "inscription", "violence"]);
        assert!(n.facts.facts()[1].text.contains("owl shoulder patch"));
    }

    #[test]
    fn every_fact_keyword_has_an_action() {
        let s = state();
        for word in s.npc.facts.keywords().chain(s.scene.keywords()).flatten() {
            assert!(keyword_action(word).is_some(), "no action for {word}");
        }
    }

    #[test]
    fn intro_names_both_sides() {
        let s = state();
        let line = intro(&s);
        assert!(line.starts_with("Hooksnap glares down at you"));
        assert!(line.ends_with("What does Shiner do?"));
    }

    #[test]
    fn bash_hit_uses_player_weapon() {
        let mut s = state();
        s.player.equip(WeaponKind::Axe.weapon());
        bash_hit(&mut s);
        assert_eq!(s.npc.harm().current(), 2);
    }

    #[test]
    fn bash_mixed_trades_blows() {
        let mut s = state();
        s.player.equip(WeaponKind::Knife.weapon());
        s.npc.equip(WeaponKind::Axe.weapon());
        bash_mixed(&mut s);
        assert_eq!(s.npc.harm().current(), 1);
        assert_eq!(s.player.harm().current(), 2);
        assert_eq!(s.npc.tension, 3);
    }

    #[test]
    fn ice_down_can_drive_tension_negative() {
        let mut s = state();
        s.npc.tension = 1;
        ice_down_hit(&mut s);
        assert_eq!(s.npc.tension, -1);
        assert_eq!(s.npc.hostility, 3);
    }

    #[test]
    fn spark_up_hit_builds_interest() {
        let mut s = state();
        spark_up_hit(&mut s);
        assert_eq!((s.npc.tension, s.npc.hostility, s.npc.interest), (3, 3, 1));
    }

    #[test]
    fn read_person_hit_reveals_three() {
        let mut s = state();
        read_person_hit(&mut s);
        let known = s.npc.facts.states().filter(|st| *st == Disclosure::Known).count();
        assert_eq!(known, 3);
    }

    #[test]
    fn hear_skies_hit_calms() {
        let mut s = state();
        hear_skies_hit(&mut s);
        assert_eq!(s.npc.tension, 1);
        let lines: Vec<&str> = s.transcript().lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("The ambient strangeness opens above your mind"));
    }

    #[test]
    fn personal_unlocks_inscription() {
        let mut s = state();
        ask_personal_stake(&mut s);
        assert_eq!(s.npc.facts.state_of("inscription"), Some(Disclosure::Known));
        assert_eq!(s.npc.facts.state_of("personal"), Some(Disclosure::Used));
    }

    #[test]
    fn owl_unlocks_star() {
        let mut s = state();
        explain_affiliation(&mut s);
        assert_eq!(s.npc.facts.state_of("star"), Some(Disclosure::Known));
        assert_eq!(s.npc.facts.state_of("owl"), Some(Disclosure::Used));
        assert_eq!(s.npc.tension, 3);
    }

    #[test]
    fn used_fact_is_not_reopened() {
        let mut s = state();
        ask_about_green(&mut s);
        ask_personal_stake(&mut s);
        assert_eq!(s.npc.facts.state_of("inscription"), Some(Disclosure::Used));
    }

    #[test]
    fn shotgun_arms_player_and_is_consumed() {
        let mut s = state();
        go_for_shotgun(&mut s);
        assert!(s.player.weapon().is(WeaponKind::Shotgun));
        assert_eq!(s.npc.tension, 6);
        assert!(s.npc.weapon().is(WeaponKind::Axe));
        assert_eq!(s.scene.state_of("shotgun"), Some(Disclosure::Used));
    }

    #[test]
    fn peace_lowers_hostility() {
        let mut s = state();
        suggest_peace(&mut s);
        assert_eq!(s.npc.hostility, 2);
    }

    fn lines(s: &EncounterState) -> Vec<&str> {
        s.transcript().lines().collect()
    }

    fn known(l: &FactLedger) -> usize {
        l.states().filter(|st| *st == Disclosure::Known).count()
    }

    #[test]
    fn brand_warms_her_up() {
        let mut s = state();
        s.npc.facts.advance("star", Disclosure::Known);
        ask_about_brand(&mut s);
        assert_eq!((s.npc.tension, s.npc.hostility, s.npc.interest), (3, 3, 1));
        assert_eq!(s.npc.facts.state_of("star"), Some(Disclosure::Used));
        assert!(lines(&s)[0].contains("glad you noticed her scar"));
    }

    #[test]
    fn spark_and_brand_reach_bargain_interest() {
        let mut s = state();
        spark_up_hit(&mut s);
        ask_about_brand(&mut s);
        assert_eq!(s.npc.interest, 2);
    }

    #[test]
    fn alone_is_pointed_out_once() {
        let mut s = state();
        s.scene.advance("alone", Disclosure::Known);
        point_out_alone(&mut s);
        assert_eq!(
            lines(&s),
            ["You nod at the empty hills. Nobody is coming to help her, and she knows it."]
        );
        assert_eq!(s.scene.state_of("alone"), Some(Disclosure::Used));
        assert_eq!((s.npc.tension, s.npc.hostility), (2, 4));
    }

    #[test]
    fn read_person_mixed_reveals_one_and_sometimes_escalates() {
        let mut tensions = Vec::new();
        for seed in 0..60 {
            let mut s = EncounterState::new(seed);
            read_person_mixed(&mut s);
            assert_eq!(known(&s.npc.facts), 1);
            assert!(lines(&s).contains(&"Hooksnap doesn't like your prying."));
            tensions.push(s.npc.tension);
        }
        assert!(tensions.iter().all(|t| *t == 2 || *t == 3));
        assert!(tensions.contains(&2));
        assert!(tensions.contains(&3));
    }

    #[test]
    fn read_person_miss_escalates_and_hides() {
        let mut s = state();
        read_person_miss(&mut s);
        assert_eq!(s.npc.tension, 3);
        assert_eq!(known(&s.npc.facts), 0);
        assert_eq!(
            lines(&s),
            [
                "The tension grows. What does Shiner do?",
                "Hooksnap lets nothing slip."
            ]
        );
    }

    #[test]
    fn read_sitch_mixed_reveals_one() {
        let mut s = state();
        read_sitch_mixed(&mut s);
        assert_eq!(known(&s.scene), 1);
    }

    #[test]
    fn read_sitch_miss_draws_a_portent() {
        let mut s = state();
        read_sitch_miss(&mut s);
        let lines = lines(&s);
        assert_eq!(lines.len(), 1);
        assert!(PORTENTS.contains(&lines[0]));
        assert_eq!(known(&s.scene), 0);
    }

    #[test]
    fn ice_down_mixed_calms_but_hardens() {
        let mut s = state();
        ice_down_mixed(&mut s);
        assert_eq!((s.npc.tension, s.npc.hostility), (0, 5));
        assert!(lines(&s)[0].ends_with("looks at you with increased suspicion."));
    }

    #[test]
    fn ice_down_miss_hardens() {
        let mut s = state();
        ice_down_miss(&mut s);
        assert_eq!((s.npc.tension, s.npc.hostility), (2, 5));
        assert_eq!(lines(&s), ["Hooksnap eyes you with more wariness."]);
    }

    #[test]
    fn spark_up_mixed_connects_without_interest() {
        let mut s = state();
        spark_up_mixed(&mut s);
        assert_eq!((s.npc.tension, s.npc.hostility, s.npc.interest), (3, 3, 0));
    }

    #[test]
    fn spark_up_miss_backfires() {
        let mut s = state();
        spark_up_miss(&mut s);
        assert_eq!((s.npc.tension, s.npc.hostility, s.npc.interest), (3, 5, 0));
        assert_eq!(
            lines(&s),
            ["She views your attempts to connect with grave suspicion."]
        );
    }

    #[test]
    fn hear_skies_mixed_confuses() {
        let mut s = state();
        hear_skies_mixed(&mut s);
        assert_eq!(s.npc.tension, 2);
        assert_eq!(known(&s.confusion), 1);
        assert!(lines(&s)[1].starts_with("A void of ambient chaos boils within your heart"));
    }

    #[test]
    fn hear_skies_miss_draws_a_portent() {
        let mut s = state();
        hear_skies_miss(&mut s);
        let lines = lines(&s);
        assert_eq!(lines.len(), 2);
        assert!(PORTENTS.contains(&lines[0]));
        assert_eq!(lines[1], "You see a dread portent in your mind's eye.");
        assert_eq!(s.npc.tension, 2);
    }

    #[test]
    fn death_closing_for_dead_player() {
        let mut s = state();
        s.player.take_harm(4);
        let lines = death_closing(&s);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("Darkness overtakes you"));
    }

    #[test]
    fn death_closing_for_dead_npc() {
        let mut s = state();
        s.player.take_harm(2);
        s.npc.take_harm(4);
        let lines = death_closing(&s);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("seriously wounded"));
        assert_eq!(
            lines[2],
            "Hooksnap falls to her knees, unable to stand. Violence has won out today."
        );
    }

    #[test]
    fn bargain_closing_text() {
        let s = state();
        let lines = bargain_closing(&s);
        assert!(lines[1].starts_with("You strike up a bargain with Hooksnap"));
        assert!(lines[1].contains("protecting her enclave"));
    }

    #[test]
    fn portents_come_from_the_table() {
        let mut rng = <StdRng as rand::SeedableRng>::seed_from_u64(1);
        for _ in 0..20 {
            assert!(PORTENTS.contains(&portent(&mut rng)));
        }
    }
}
