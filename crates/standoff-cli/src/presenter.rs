//! Terminal rendering of encounter events.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use standoff_encounter::character::Stat;
use standoff_encounter::event::StatDetail;
use standoff_encounter::{MenuItem, Participant, Presenter, StatBlock};

/// Prints one turn at a time.
///
/// Narration is held until the turn closes and then printed newest first,
/// the way the transcript reads. Stat blocks and the menu come last.
#[derive(Default)]
pub struct TerminalPresenter {
    pending: Vec<String>,
    npc: Option<StatBlock>,
    player: Option<StatBlock>,
    stats_changed: bool,
    menu: Vec<MenuItem>,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn print_pending(&mut self) {
        for line in self.pending.drain(..).rev() {
            println!("  {line}");
        }
    }
}

impl Presenter for TerminalPresenter {
    fn render_stats(&mut self, block: &StatBlock) {
        let slot = match block.participant {
            Participant::Npc => &mut self.npc,
            Participant::Player => &mut self.player,
        };
        *slot = Some(block.clone());
        self.stats_changed = true;
    }

    fn append_log(&mut self, text: &str) {
        self.pending.push(text.to_string());
    }

    fn separator(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        self.print_pending();
        println!("  {}", "----".dimmed());
    }

    fn present_menu(&mut self, items: &[MenuItem]) {
        self.menu = items.to_vec();
    }

    fn finish(&mut self) {
        self.print_pending();

        if self.stats_changed {
            let blocks: Vec<&StatBlock> = [&self.npc, &self.player]
                .into_iter()
                .flatten()
                .collect();
            println!("{}", stats_table(&blocks));
            self.stats_changed = false;
        }

        if !self.menu.is_empty() {
            println!();
            println!("  {}", "What do you do?".bold());
            print!("{}", render_menu(&self.menu));
            self.menu.clear();
        }
    }
}

/// Tabulate stat blocks, one row each.
pub fn stats_table(blocks: &[&StatBlock]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Harm", "Weapon", "Condition"]);
    for block in blocks {
        table.add_row(vec![
            block.name.clone(),
            format!("{}/{}", block.harm_current, block.harm_max),
            block.armed_line(),
            condition(block),
        ]);
    }
    table
}

fn condition(block: &StatBlock) -> String {
    match &block.detail {
        StatDetail::Npc { .. } => block.tension_line().unwrap_or_default(),
        StatDetail::Player(stats) => Stat::ALL
            .iter()
            .map(|stat| format!("{stat} {:+}", stats.get(*stat)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Numbered menu, counting from 1.
pub fn render_menu(items: &[MenuItem]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("  [{}] {}\n", i + 1, item.label))
        .collect()
}
