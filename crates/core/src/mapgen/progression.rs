//! Progress-scaling rules: how clear count and difficulty shape a generated map.

use crate::ruleset::Ruleset;
use crate::types::Difficulty;

pub fn obstacle_count(clear_count: u32, obstacle_cap: usize) -> usize {
    (clear_count as usize).min(obstacle_cap)
}

pub fn preplaced_trap_count(ruleset: &Ruleset, difficulty: Difficulty) -> usize {
    if ruleset.traps_enabled { difficulty.profile().preplaced_traps } else { 0 }
}

pub fn player_trap_charges(ruleset: &Ruleset, difficulty: Difficulty) -> u8 {
    if ruleset.traps_enabled { difficulty.profile().player_trap_charges } else { 0 }
}
