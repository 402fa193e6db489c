//! Shared test fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating layout and session setup across many tests.
//! It does not own production gameplay logic.

use super::*;
use crate::ruleset::LayoutStrategy;
use crate::state::Grid;

/// 5x5 ruleset whose geometry matches `open_room_layout`, so restarts stay in the same room.
pub(crate) fn open_room_ruleset() -> Ruleset {
    Ruleset {
        width: 5,
        height: 5,
        layout: LayoutStrategy::Scattered { wall_count: 0 },
        randomize_pursuer_corner: false,
        ..Ruleset::canonical()
    }
}

/// Empty 3x3 interior: player (1,1), pursuer (3,3), key (2,2), exit (3,1).
pub(crate) fn open_room_layout() -> GeneratedMap {
    GeneratedMap {
        grid: Grid::new(5, 5),
        player_start: Pos::new(1, 1),
        pursuer_start: Pos::new(3, 3),
        key: Pos::new(2, 2),
        exit: Pos::new(3, 1),
        preplaced_traps: Vec::new(),
    }
}

/// 9x9 room with the player, key and exit along the top row and the pursuer far below.
pub(crate) fn long_hall_layout() -> GeneratedMap {
    GeneratedMap {
        grid: Grid::new(9, 9),
        player_start: Pos::new(1, 1),
        pursuer_start: Pos::new(7, 7),
        key: Pos::new(3, 1),
        exit: Pos::new(7, 1),
        preplaced_traps: Vec::new(),
    }
}

pub(crate) fn long_hall_ruleset() -> Ruleset {
    Ruleset {
        width: 9,
        height: 9,
        layout: LayoutStrategy::Scattered { wall_count: 0 },
        randomize_pursuer_corner: false,
        ..Ruleset::canonical()
    }
}

pub(crate) fn session_with_layout(
    layout: GeneratedMap,
    ruleset: Ruleset,
    difficulty: Difficulty,
) -> (GameSession, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let config = SessionConfig { seed: 0x5eed, ruleset, difficulty, clear_count: 0 };
    let session = GameSession::from_layout(config, layout, clock.clone());
    (session, clock)
}

pub(crate) fn open_room_session(difficulty: Difficulty) -> (GameSession, Arc<ManualClock>) {
    session_with_layout(open_room_layout(), open_room_ruleset(), difficulty)
}

pub(crate) fn long_hall_session(difficulty: Difficulty) -> (GameSession, Arc<ManualClock>) {
    session_with_layout(long_hall_layout(), long_hall_ruleset(), difficulty)
}

/// Bare state for driving the pursuer directly.
pub(crate) fn chase_state(grid: Grid, player: Pos, pursuer: Pos) -> GameState {
    GameState {
        grid,
        player,
        pursuer: Pursuer { pos: pursuer, stun_turns_remaining: 0 },
        key: None,
        exit: Pos::new(1, 1),
        has_key: false,
        traps: SlotMap::with_key(),
    }
}
