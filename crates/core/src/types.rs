use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use thiserror::Error;

use crate::ruleset::RulesetError;

new_key_type! {
    pub struct TrapId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { y: self.y + dy, x: self.x + dx }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
}

/// Who is asking to enter a cell; obstacles treat the two differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Actor {
    Player,
    Pursuer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parses a single bulk-move code (`u`, `d`, `l`, `r`, any case).
    pub fn from_code(code: char) -> Option<Direction> {
        match code.to_ascii_lowercase() {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// How often the pursuer gets to move relative to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PursuerCadence {
    EveryOtherTurn,
    OncePerTurn,
    TwicePerTurn,
}

impl PursuerCadence {
    /// Step budget for the turn that just brought `turn_count` to its value.
    pub fn steps_for_turn(self, turn_count: u32) -> u8 {
        match self {
            PursuerCadence::EveryOtherTurn => u8::from(turn_count % 2 == 0),
            PursuerCadence::OncePerTurn => 1,
            PursuerCadence::TwicePerTurn => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DifficultyProfile {
    pub cadence: PursuerCadence,
    pub player_trap_charges: u8,
    pub preplaced_traps: usize,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                cadence: PursuerCadence::EveryOtherTurn,
                player_trap_charges: 0,
                preplaced_traps: 0,
            },
            Difficulty::Normal => DifficultyProfile {
                cadence: PursuerCadence::OncePerTurn,
                player_trap_charges: 0,
                preplaced_traps: 0,
            },
            Difficulty::Hard => DifficultyProfile {
                cadence: PursuerCadence::TwicePerTurn,
                player_trap_charges: 1,
                preplaced_traps: 1,
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrapOrigin {
    Preplaced,
    PlayerPlaced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Escaped,
    Caught,
}

/// Terminal or partial outcome detected after a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    Caught,
    KeyCollected,
    Escaped,
    DoorLocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted,
    Blocked,
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkStop {
    Blocked,
    Terminal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulkReport {
    pub applied: usize,
    pub stopped: Option<BulkStop>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrapPlacement {
    Placed,
    Unavailable,
    AlreadySet,
    NoCharges,
    Ignored,
}

/// Last user-facing event of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    Intro,
    Blocked,
    Caught,
    FoundKey,
    Escaped,
    DoorLocked,
    PursuerTrapped,
    PursuerStillStunned { remaining: u8 },
    PursuerBrokeFree,
    TrapPlaced,
    TrapAlreadySet,
    NoTrapCharges,
    TrapsUnavailable,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Intro => f.write_str("Trapped in the mansion... find the key and get out."),
            Message::Blocked => f.write_str("You can't go that way!"),
            Message::Caught => f.write_str("Caught by the pursuer..."),
            Message::FoundKey => f.write_str("Found the key! Now find the exit."),
            Message::Escaped => f.write_str("Escaped! Congratulations!"),
            Message::DoorLocked => f.write_str("The door is locked... you need the key."),
            Message::PursuerTrapped => f.write_str("The pursuer stepped on a trap and is stunned!"),
            Message::PursuerStillStunned { remaining } => {
                write!(f, "The pursuer is still stunned ({remaining} more turns).")
            }
            Message::PursuerBrokeFree => f.write_str("The pursuer broke free!"),
            Message::TrapPlaced => f.write_str("Trap set."),
            Message::TrapAlreadySet => f.write_str("A trap is already set."),
            Message::NoTrapCharges => f.write_str("No traps left."),
            Message::TrapsUnavailable => f.write_str("Traps are not available on this difficulty."),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("no solvable map found after {attempts} attempts")]
    Exhausted { attempts: u32 },

    #[error("fixed layout has no route from start to key to exit")]
    UnsolvableLayout,

    #[error("invalid ruleset: {0}")]
    InvalidRuleset(#[from] RulesetError),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("difficulty can only change before the first move")]
    DifficultyLocked,

    #[error("session is busy with another action")]
    SessionBusy,

    #[error(transparent)]
    Generation(#[from] GenerationError),
}
