//! Fact ledger: hidden facts and how much of each has been disclosed.
//!
//! Each fact carries its text, disclosure state and optional menu keyword in
//! one record, so the three can never drift out of alignment. Disclosure only
//! moves forward: unknown, then known, then used.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// How far a fact has been disclosed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Disclosure {
    /// Not yet revealed to the player.
    Unknown,
    /// Revealed; its keyword action may be offered.
    Known,
    /// Revealed and already acted on.
    Used,
}

/// A single disclosable piece of narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// What the player learns.
    pub text: String,
    /// Disclosure state.
    pub state: Disclosure,
    /// Menu keyword that unlocks an action once the fact is known.
    pub keyword: Option<String>,
}

impl Fact {
    /// A fresh, undisclosed fact.
    pub fn new(text: impl Into<String>, keyword: Option<&str>) -> Self {
        Self {
            text: text.into(),
            state: Disclosure::Unknown,
            keyword: keyword.map(str::to_string),
        }
    }
}

/// An ordered list of facts about one named thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactLedger {
    name: String,
    facts: Vec<Fact>,
}

impl FactLedger {
    /// Create an empty ledger.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            facts: Vec::new(),
        }
    }

    /// Create a ledger from `(text, keyword)` pairs, all undisclosed.
    pub fn with_facts<'a, I>(name: impl Into<String>, facts: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut ledger = Self::new(name);
        for (text, keyword) in facts {
            ledger.add_fact(text, keyword);
        }
        ledger
    }

    /// What the ledger is about.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All facts in order.
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Number of facts.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Whether the ledger holds no facts.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Disclosure states, index-aligned with [`facts`](Self::facts).
    pub fn states(&self) -> impl Iterator<Item = Disclosure> + '_ {
        self.facts.iter().map(|f| f.state)
    }

    /// Keywords, index-aligned with [`facts`](Self::facts).
    pub fn keywords(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.facts.iter().map(|f| f.keyword.as_deref())
    }

    /// Append a new, undisclosed fact.
    pub fn add_fact(&mut self, text: impl Into<String>, keyword: Option<&str>) {
        self.facts.push(Fact::new(text, keyword));
    }

    /// Keywords of facts that are known but not yet acted on, first
    /// occurrence only.
    pub fn known_keywords(&self) -> Vec<&str> {
        let mut words: Vec<&str> = Vec::new();
        let known = self.facts.iter().filter(|f| f.state == Disclosure::Known);
        for word in known.filter_map(|f| f.keyword.as_deref()) {
            if !words.contains(&word) {
                words.push(word);
            }
        }
        words
    }

    /// Furthest disclosure reached by any fact tagged with `keyword`.
    pub fn state_of(&self, keyword: &str) -> Option<Disclosure> {
        self.tagged(keyword).map(|(_, f)| f.state).max()
    }

    fn tagged<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = (usize, &'a Fact)> + 'a {
        self.facts
            .iter()
            .enumerate()
            .filter(move |(_, f)| f.keyword.as_deref() == Some(keyword))
    }

    /// Move one fact tagged with `keyword` forward to `state`.
    ///
    /// Of the tagged facts still short of `state`, the furthest disclosed one
    /// moves, earliest first on a tie; using a keyword consumes the known
    /// fact that offered it. Returns false when no tagged fact is short of
    /// `state`.
    pub fn advance(&mut self, keyword: &str, state: Disclosure) -> bool {
        let mut target: Option<(usize, Disclosure)> = None;
        for (i, fact) in self.tagged(keyword) {
            if fact.state < state && target.is_none_or(|(_, best)| fact.state > best) {
                target = Some((i, fact.state));
            }
        }
        let Some((i, _)) = target else {
            tracing::debug!(ledger = %self.name, keyword, "no fact to advance for keyword");
            return false;
        };
        self.facts[i].state = state;
        true
    }

    /// Reveal up to `count` undisclosed facts, chosen at random.
    ///
    /// Revealed facts become known. With nothing left to reveal a single
    /// fallback line is returned instead.
    pub fn reveal(&mut self, count: usize, rng: &mut StdRng) -> Vec<String> {
        let mut pool: Vec<usize> = self
            .facts
            .iter()
            .enumerate()
            .filter(|(_, f)| f.state == Disclosure::Unknown)
            .map(|(i, _)| i)
            .collect();

        if pool.is_empty() {
            return vec![format!(
                "Nothing more to learn about {}.",
                self.name.to_lowercase()
            )];
        }

        let mut revealed = Vec::with_capacity(count.min(pool.len()));
        while revealed.len() < count && !pool.is_empty() {
            let index = pool.remove(rng.random_range(0..pool.len()));
            let fact = &mut self.facts[index];
            fact.state = Disclosure::Known;
            revealed.push(fact.text.clone());
        }
        tracing::debug!(ledger = %self.name, count = revealed.len(), "facts revealed");
        revealed
    }
}

/// Anything that keeps a fact ledger: the NPC, the scene, the ambience.
pub trait FactHolder {
    /// The ledger.
    fn ledger(&self) -> &FactLedger;

    /// The ledger, mutably.
    fn ledger_mut(&mut self) -> &mut FactLedger;
}

impl FactHolder for FactLedger {
    fn ledger(&self) -> &FactLedger {
        self
    }

    fn ledger_mut(&mut self) -> &mut FactLedger {
        self
    }
}

/// Reveal up to `count` undisclosed facts from `target`.
pub fn reveal<H: FactHolder + ?Sized>(count: usize, target: &mut H, rng: &mut StdRng) -> Vec<String> {
    target.ledger_mut().reveal(count, rng)
}
