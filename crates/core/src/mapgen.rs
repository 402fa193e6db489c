//! Procedural map generation split into layout, sampling, and solvability submodules.

pub mod model;
pub mod progression;

mod generator;
mod layout;
mod reachability;
mod sampling;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::ruleset::Ruleset;
use crate::types::{Difficulty, GenerationError};

pub use generator::MapGenerator;
pub use model::GeneratedMap;
pub use reachability::reachable;

pub fn generate_map(
    seed: u64,
    ruleset: &Ruleset,
    clear_count: u32,
    difficulty: Difficulty,
) -> Result<GeneratedMap, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    MapGenerator::new(ruleset).generate(&mut rng, clear_count, difficulty)
}
