use std::sync::Arc;

use anyhow::{Result, bail};
use clap::{ArgAction, Parser};
use escape_core::{
    Difficulty, Direction, GameSession, ManualClock, SessionConfig, replay::replay_to_end,
};
use escape_tools::logging::init_logging;
use log::info;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    inputs: u32,
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    slice[rng.next_u64() as usize % slice.len()]
}

fn check_invariants(session: &GameSession) -> Result<()> {
    let state = session.state();
    if !state.grid.is_floor(state.player) || state.grid.has_obstacle(state.player) {
        bail!("player on impassable cell {}", state.player);
    }
    if !state.grid.is_floor(state.pursuer.pos) {
        bail!("pursuer inside a wall at {}", state.pursuer.pos);
    }
    if state.has_key == state.key.is_some() {
        bail!("key flag and key position disagree");
    }
    if session.is_game_over() && session.is_win() {
        bail!("session both won and lost");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    println!("Starting fuzz harness on seed {} for {} inputs...", args.seed, args.inputs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let config = SessionConfig {
        seed: args.seed,
        difficulty: choose(&mut rng, &Difficulty::ALL),
        ..SessionConfig::default()
    };
    let mut session = GameSession::with_clock(config, Arc::new(ManualClock::new()))?;

    let (mut wins, mut losses) = (0_u32, 0_u32);
    for _ in 0..args.inputs {
        if session.is_terminal() {
            if session.is_win() {
                wins += 1;
            } else {
                losses += 1;
            }
            info!("game ended after {} turns", session.turn_count());
            session.restart()?;
            continue;
        }
        match rng.next_u64() % 10 {
            0 => {
                session.place_trap();
            }
            1 => {
                let sequence: String =
                    (0..6).map(|_| choose(&mut rng, &['u', 'd', 'l', 'r'])).collect();
                session.submit_bulk_moves(&sequence);
            }
            _ => {
                session.submit_move(choose(&mut rng, &Direction::ALL));
            }
        }
        check_invariants(&session)?;
    }

    let replayed = replay_to_end(session.journal(), Arc::new(ManualClock::new()))?;
    if replayed.final_snapshot_hash != session.snapshot_hash() {
        bail!("replay diverged from the live session");
    }

    println!(
        "Fuzz complete: {wins} escapes, {losses} captures, {} clears, hash {}",
        session.clear_count(),
        session.snapshot_hash()
    );
    Ok(())
}
