use std::path::Path;

use colored::Colorize;

use standoff_encounter::{Encounter, EncounterConfig, EncounterStatus};

use crate::presenter::TerminalPresenter;

pub fn run(seed: u64, max_turns: u32, transcript: Option<&Path>) -> Result<(), String> {
    let config = EncounterConfig::default().with_seed(seed);
    let mut encounter = Encounter::new(config);
    let mut presenter = TerminalPresenter::new();

    println!(
        "  {} Standoff {}",
        "Autoplay".bold(),
        format!("(seed={}, max {max_turns} turns)", encounter.config().seed).dimmed()
    );
    println!();
    encounter.flush(&mut presenter);

    while encounter.turns() < max_turns {
        let Some(index) = encounter.random_choice() else {
            break;
        };
        let label = encounter
            .menu()
            .get(index)
            .map(|item| item.label.clone())
            .unwrap_or_default();
        println!("\n  {} {label}\n", ">".bold());

        encounter.select(index).map_err(|e| e.to_string())?;
        encounter.flush(&mut presenter);
    }

    println!();
    let outcome = match encounter.status() {
        EncounterStatus::Death => "death".red().bold(),
        EncounterStatus::Bargain => "bargain".green().bold(),
        EncounterStatus::InProgress => "undecided".yellow().bold(),
    };
    println!(
        "  {} {outcome} after {} turns",
        "Outcome:".bold(),
        encounter.turns()
    );

    if let Some(path) = transcript {
        super::write_transcript(encounter.transcript(), path)?;
    }
    Ok(())
}
