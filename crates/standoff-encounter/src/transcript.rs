//! The narrative transcript.
//!
//! Entries are stored in the order they were emitted. Displays read
//! most-recent-first, which is why a move's header line is emitted after its
//! results.

use serde::{Deserialize, Serialize};

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranscriptEntry {
    /// A line of narration.
    Line(String),
    /// The end of a turn.
    Separator,
}

/// Everything narrated during one encounter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    /// All entries in emission order.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Number of entries, separators included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been narrated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in display order: newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter().rev()
    }

    /// Narration lines only, in emission order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match e {
            TranscriptEntry::Line(text) => Some(text.as_str()),
            TranscriptEntry::Separator => None,
        })
    }

    /// Turns oldest first, each turn's lines newest first as they are displayed.
    pub fn turns(&self) -> Vec<Vec<&str>> {
        let mut turns = Vec::new();
        let mut current = Vec::new();
        for entry in self.newest_first() {
            match entry {
                TranscriptEntry::Line(text) => current.push(text.as_str()),
                TranscriptEntry::Separator => {
                    if !current.is_empty() {
                        turns.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            turns.push(current);
        }
        turns.reverse();
        turns
    }

    /// Export as markdown, one section per turn.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Encounter Transcript\n\n");
        for (i, turn) in self.turns().iter().enumerate() {
            out.push_str(&format!("## Turn {}\n\n", i + 1));
            for line in turn {
                out.push_str(&format!("{line}\n\n"));
            }
        }
        out
    }

    /// Export as pretty-printed JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Export as plain text with a rule between turns.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Encounter Transcript\n====================\n\n");
        for turn in self.turns() {
            for line in turn {
                out.push_str(line);
                out.push('\n');
            }
            out.push_str("----\n");
        }
        out
    }
}
