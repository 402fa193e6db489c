//! Uniform sampling helpers over an injected random stream.
//! This module exists so every random decision in generation draws from one seedable source.

use rand_chacha::rand_core::Rng;

use crate::types::Pos;

pub(super) fn random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}

pub(super) fn choose<R: Rng + ?Sized>(rng: &mut R, candidates: &[Pos]) -> Option<Pos> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[random_index(rng, candidates.len())])
}

/// Picks `count` distinct cells with a partial Fisher-Yates shuffle.
pub(super) fn sample_distinct<R: Rng + ?Sized>(
    rng: &mut R,
    mut candidates: Vec<Pos>,
    count: usize,
) -> Vec<Pos> {
    let count = count.min(candidates.len());
    for index in 0..count {
        let pick = index + random_index(rng, candidates.len() - index);
        candidates.swap(index, pick);
    }
    candidates.truncate(count);
    candidates
}
