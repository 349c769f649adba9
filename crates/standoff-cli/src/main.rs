//! CLI frontend for the Standoff encounter engine.

mod commands;
mod presenter;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "standoff",
    about = "Standoff: talk, fight or bargain your way past Hooksnap",
    version,
    propagate_version = true
)]
struct Cli {
    /// Print engine diagnostics to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an encounter interactively
    Play {
        /// RNG seed for dice, facts and menus
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Save the transcript on exit (.md, .json or plain text)
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },

    /// Let the dice choose every action and print the encounter
    Auto {
        /// RNG seed for dice, facts, menus and choices
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Stop after this many actions even if nobody has won
        #[arg(short = 'n', long, default_value = "100")]
        max_turns: u32,

        /// Save the transcript when done (.md, .json or plain text)
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play { seed, transcript } => commands::play::run(seed, transcript.as_deref()),
        Commands::Auto {
            seed,
            max_turns,
            transcript,
        } => commands::auto::run(seed, max_turns, transcript.as_deref()),
    };

    if let Err(e) = result {
        tracing::error!(%e, "command failed");
        eprintln!("error: {e}");
        process::exit(1);
    }
}
