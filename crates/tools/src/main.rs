use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use escape_core::{InputJournal, MonotonicClock, replay::replay_session};
use escape_tools::logging::init_logging;
use log::info;

#[derive(Parser)]
#[command(author, version, about = "Replay a recorded session journal", long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: String,

    /// Print the final board
    #[arg(long)]
    board: bool,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal))?;
    let journal: InputJournal = serde_json::from_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;
    info!("replaying {} inputs from seed {}", journal.inputs.len(), journal.seed);

    let session = replay_session(&journal, Arc::new(MonotonicClock::new()))
        .context("Replay failed during execution")?;

    println!("Replay complete.");
    println!("Inputs: {}", journal.inputs.len());
    println!("Turns: {}", session.turn_count());
    println!("Clears: {}", session.clear_count());
    println!("Outcome: {:?}", session.outcome());
    println!("Snapshot Hash: {}", session.snapshot_hash());
    if args.board {
        for row in session.view().render_rows() {
            println!("{row}");
        }
    }

    Ok(())
}
