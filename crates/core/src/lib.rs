pub mod game;
pub mod journal;
pub mod mapgen;
pub mod replay;
pub mod ruleset;
pub mod state;
pub mod types;

pub use game::{
    Clock, GameSession, Glyph, ManualClock, MonotonicClock, SessionConfig, SessionView,
    SharedSession, TRAP_STUN_TURNS,
};
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use mapgen::{GeneratedMap, MapGenerator, generate_map, reachable};
pub use replay::*;
pub use ruleset::{LayoutStrategy, Ruleset, RulesetError};
pub use state::{GameState, Grid};
pub use types::*;
