use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use standoff_encounter::{Encounter, EncounterConfig, EncounterError};

use crate::presenter::TerminalPresenter;

pub fn run(seed: u64, transcript: Option<&Path>) -> Result<(), String> {
    let config = EncounterConfig::default().with_seed(seed);
    let mut encounter = Encounter::new(config);
    let mut presenter = TerminalPresenter::new();

    println!("  {} Standoff", "Starting".bold());
    println!("  Seed: {}", encounter.config().seed);
    println!("  Pick an action by number. 'reset' starts over, 'quit' exits.\n");
    encounter.flush(&mut presenter);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }
        if input.eq_ignore_ascii_case("reset") {
            encounter.reset();
            println!("\n  {}\n", "Starting over.".bold());
            encounter.flush(&mut presenter);
            continue;
        }

        let Ok(number) = input.parse::<usize>() else {
            println!("{}\n", format!("not a menu number: {input}").yellow());
            continue;
        };

        match encounter.select(number.wrapping_sub(1)) {
            Ok(_) => {
                println!();
                encounter.flush(&mut presenter);
            }
            Err(EncounterError::InvalidChoice { available, .. }) => {
                println!(
                    "{}\n",
                    format!("pick a number from 1 to {available}").yellow()
                );
            }
            Err(EncounterError::Finished) => {
                println!(
                    "{}\n",
                    "The encounter is over. Type 'reset' or 'quit'.".yellow()
                );
            }
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    if let Some(path) = transcript {
        super::write_transcript(encounter.transcript(), path)?;
    }
    Ok(())
}
