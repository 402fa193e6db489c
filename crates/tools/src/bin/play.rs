//! Line-oriented terminal shell for playing a session.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use escape_core::{Direction, GameSession, SessionView};
use escape_tools::config::{DifficultyArg, Overrides, ToolConfig};
use escape_tools::logging::init_logging;

#[derive(Parser)]
#[command(author, version, about = "Play the mansion escape in a terminal", long_about = None)]
struct Args {
    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Starting clear count, which scales obstacles
    #[arg(long)]
    clears: Option<u32>,

    /// Use the fixed hand-drawn layout
    #[arg(long)]
    classic: bool,

    /// Write the input journal here on exit
    #[arg(long)]
    save_journal: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

enum Command {
    Move(Direction),
    Bulk(String),
    Trap,
    Restart,
    Difficulty(DifficultyArg),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let command = match line {
        "w" => Command::Move(Direction::Up),
        "s" => Command::Move(Direction::Down),
        "a" => Command::Move(Direction::Left),
        "d" => Command::Move(Direction::Right),
        "t" | "trap" => Command::Trap,
        "restart" => Command::Restart,
        "easy" => Command::Difficulty(DifficultyArg::Easy),
        "normal" => Command::Difficulty(DifficultyArg::Normal),
        "hard" => Command::Difficulty(DifficultyArg::Hard),
        "?" | "help" => Command::Help,
        "q" | "quit" => Command::Quit,
        _ => {
            let sequence = line.strip_prefix("go ")?;
            Command::Bulk(sequence.to_string())
        }
    };
    Some(command)
}

fn render(out: &mut impl Write, view: &SessionView) -> io::Result<()> {
    writeln!(out)?;
    for row in view.render_rows() {
        writeln!(out, "{row}")?;
    }
    writeln!(
        out,
        "turn {} | clears {} | {} | key {} | traps {} | {}s",
        view.turn_count,
        view.clear_count,
        view.difficulty,
        if view.has_key { "yes" } else { "no" },
        view.trap_charges_remaining,
        view.elapsed.as_secs()
    )?;
    if view.stun_turns_remaining > 0 {
        writeln!(out, "pursuer stunned for {} more turns", view.stun_turns_remaining)?;
    }
    if let Some(message) = view.message {
        writeln!(out, "{message}")?;
    }
    if view.win || view.game_over {
        writeln!(out, "type 'restart' to play again or 'q' to quit")?;
    }
    Ok(())
}

const HELP: &str = "moves: w/a/s/d | go <u/d/l/r codes>: bulk moves (e.g. go rrdd) | \
                    t: trap | easy/normal/hard: difficulty before first move | restart | q";

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let overrides = Overrides {
        seed: args.seed,
        difficulty: args.difficulty,
        clear_count: args.clears,
        classic: args.classic,
    };
    let config = ToolConfig::resolve(args.config.as_deref(), overrides)?;
    let mut session =
        GameSession::new(config.session_config()).context("Failed to generate the mansion")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{HELP}")?;
    render(&mut out, &session.view())?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;
        let view = match parse_command(&line) {
            Some(Command::Move(direction)) => session.submit_move(direction),
            Some(Command::Bulk(sequence)) => session.submit_bulk_moves(&sequence),
            Some(Command::Trap) => session.place_trap(),
            Some(Command::Restart) => match session.restart() {
                Ok(view) => view,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    continue;
                }
            },
            Some(Command::Difficulty(difficulty)) => {
                match session.set_difficulty(difficulty.into()) {
                    Ok(view) => view,
                    Err(err) => {
                        writeln!(out, "{err}")?;
                        continue;
                    }
                }
            }
            Some(Command::Help) | None => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Some(Command::Quit) => break,
        };
        render(&mut out, &view)?;
    }

    if let Some(path) = &args.save_journal {
        let json = session.journal().to_json().context("Failed to serialize journal")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write journal: {}", path.display()))?;
        writeln!(out, "journal saved to {}", path.display())?;
    }
    Ok(())
}
