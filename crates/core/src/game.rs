//! Game session ownership: entities, counters, timers, and the input journal.
//! Turn resolution lives in the `engine`, `pursuer`, `events`, and `traps` submodules.

use std::sync::Arc;
use std::time::Duration;

use log::info;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;

use crate::journal::{InputJournal, InputPayload};
use crate::mapgen::{GeneratedMap, MapGenerator, progression};
use crate::ruleset::Ruleset;
use crate::state::{GameState, Pursuer};
use crate::types::*;

mod clock;
mod engine;
mod events;
mod hash;
mod pursuer;
mod shared;
mod traps;
mod view;

#[cfg(test)]
mod test_support;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use pursuer::{PursuerReport, TRAP_STUN_TURNS};
pub use shared::SharedSession;
pub use view::{Glyph, SessionView};

/// Everything needed to build a session; `clear_count` and `difficulty` carry across restarts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: u64,
    pub ruleset: Ruleset,
    pub difficulty: Difficulty,
    pub clear_count: u32,
}

pub struct GameSession {
    seed: u64,
    ruleset: Ruleset,
    difficulty: Difficulty,
    rng: ChaCha8Rng,
    clock: Arc<dyn Clock>,
    state: GameState,
    turn_count: u32,
    clear_count: u32,
    trap_charges: u8,
    game_over: bool,
    win: bool,
    // Guards clear_count so one session can only ever add a single clear.
    win_counted: bool,
    message: Option<Message>,
    started_at: Duration,
    ended_at: Option<Duration>,
    journal: InputJournal,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Result<Self, GenerationError> {
        Self::with_clock(config, Arc::new(MonotonicClock::new()))
    }

    pub fn with_clock(
        config: SessionConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let generated = MapGenerator::new(&config.ruleset).generate(
            &mut rng,
            config.clear_count,
            config.difficulty,
        )?;
        info!(
            "new session: seed={} difficulty={} clears={} pursuer at {}",
            config.seed, config.difficulty, config.clear_count, generated.pursuer_start
        );
        Ok(Self::assemble(config, rng, clock, generated))
    }

    /// Builds a session around an explicit layout instead of generating one.
    /// Restarts still regenerate from the seed.
    pub(crate) fn from_layout(
        config: SessionConfig,
        generated: GeneratedMap,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::assemble(config, rng, clock, generated)
    }

    fn assemble(
        config: SessionConfig,
        rng: ChaCha8Rng,
        clock: Arc<dyn Clock>,
        generated: GeneratedMap,
    ) -> Self {
        let journal = InputJournal::new(&config);
        let started_at = clock.now();
        Self {
            seed: config.seed,
            trap_charges: progression::player_trap_charges(&config.ruleset, config.difficulty),
            ruleset: config.ruleset,
            difficulty: config.difficulty,
            rng,
            clock,
            state: state_from_generated(generated),
            turn_count: 0,
            clear_count: config.clear_count,
            game_over: false,
            win: false,
            win_counted: false,
            message: Some(Message::Intro),
            started_at,
            ended_at: None,
            journal,
        }
    }

    /// Replaces the board with a fresh map; counters that outlive a game are kept.
    fn regenerate(&mut self) -> Result<(), GenerationError> {
        let generated = MapGenerator::new(&self.ruleset).generate(
            &mut self.rng,
            self.clear_count,
            self.difficulty,
        )?;
        self.state = state_from_generated(generated);
        self.turn_count = 0;
        self.trap_charges = progression::player_trap_charges(&self.ruleset, self.difficulty);
        self.game_over = false;
        self.win = false;
        self.win_counted = false;
        self.message = Some(Message::Intro);
        self.started_at = self.clock.now();
        self.ended_at = None;
        Ok(())
    }

    fn record(&mut self, payload: InputPayload) {
        self.journal.append(payload);
    }

    fn record_end(&mut self) {
        if self.ended_at.is_none() {
            self.ended_at = Some(self.clock.now());
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn difficulty_locked(&self) -> bool {
        self.turn_count > 0
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn clear_count(&self) -> u32 {
        self.clear_count
    }

    pub fn trap_charges(&self) -> u8 {
        self.trap_charges
    }

    pub fn message(&self) -> Option<Message> {
        self.message
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_win(&self) -> bool {
        self.win
    }

    pub fn is_terminal(&self) -> bool {
        self.game_over || self.win
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        if self.win {
            Some(RunOutcome::Escaped)
        } else if self.game_over {
            Some(RunOutcome::Caught)
        } else {
            None
        }
    }

    /// Frozen at the end time once the session is terminal.
    pub fn elapsed(&self) -> Duration {
        let until = self.ended_at.unwrap_or_else(|| self.clock.now());
        until.saturating_sub(self.started_at)
    }

    pub fn journal(&self) -> &InputJournal {
        &self.journal
    }
}

fn state_from_generated(generated: GeneratedMap) -> GameState {
    let mut state = GameState {
        grid: generated.grid,
        player: generated.player_start,
        pursuer: Pursuer { pos: generated.pursuer_start, stun_turns_remaining: 0 },
        key: Some(generated.key),
        exit: generated.exit,
        has_key: false,
        traps: SlotMap::with_key(),
    };
    for pos in generated.preplaced_traps {
        state.add_trap(pos, TrapOrigin::Preplaced);
    }
    state
}
