//! High-level map generation: layout, solvability search, obstacle scatter, and trap placement.

use log::debug;
use rand_chacha::rand_core::Rng;

use crate::ruleset::{LayoutStrategy, Ruleset};
use crate::state::Grid;
use crate::types::{Difficulty, GenerationError, Pos};

use super::layout::{carve_classic_walls, scatter_walls};
use super::model::GeneratedMap;
use super::progression::{obstacle_count, preplaced_trap_count};
use super::reachability::reachable;
use super::sampling::{choose, random_index, sample_distinct};

pub struct MapGenerator<'a> {
    ruleset: &'a Ruleset,
}

impl<'a> MapGenerator<'a> {
    pub fn new(ruleset: &'a Ruleset) -> Self {
        Self { ruleset }
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        clear_count: u32,
        difficulty: Difficulty,
    ) -> Result<GeneratedMap, GenerationError> {
        self.ruleset.validate()?;

        let player_start = self.ruleset.player_start();
        let exit = self.ruleset.exit();
        let pursuer_start = self.choose_pursuer_start(rng);

        let (mut grid, key) = match self.ruleset.layout {
            LayoutStrategy::Classic => self.classic_layout()?,
            LayoutStrategy::Scattered { wall_count } => self.scattered_layout(rng, wall_count)?,
        };

        let landmarks = [player_start, pursuer_start, key, exit];
        let requested = obstacle_count(clear_count, self.ruleset.obstacle_cap);
        place_obstacles(&mut grid, rng, requested, &landmarks);

        let trap_count = preplaced_trap_count(self.ruleset, difficulty);
        let preplaced_traps = sample_distinct(rng, free_cells(&grid, &landmarks), trap_count);

        Ok(GeneratedMap { grid, player_start, pursuer_start, key, exit, preplaced_traps })
    }

    fn choose_pursuer_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Pos {
        let corners = self.ruleset.pursuer_corners();
        if self.ruleset.randomize_pursuer_corner {
            corners[random_index(rng, corners.len())]
        } else {
            corners[0]
        }
    }

    fn reserved_cells(&self) -> Vec<Pos> {
        let mut reserved = vec![self.ruleset.player_start(), self.ruleset.exit()];
        reserved.extend(self.ruleset.pursuer_corners());
        reserved.extend(self.ruleset.fixed_key());
        reserved
    }

    fn classic_layout(&self) -> Result<(Grid, Pos), GenerationError> {
        let mut grid = Grid::new(self.ruleset.width, self.ruleset.height);
        carve_classic_walls(&mut grid);
        let key = self.ruleset.fixed_key().ok_or(GenerationError::UnsolvableLayout)?;
        if !self.is_solvable(&grid, key) {
            return Err(GenerationError::UnsolvableLayout);
        }
        Ok((grid, key))
    }

    fn scattered_layout<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        wall_count: usize,
    ) -> Result<(Grid, Pos), GenerationError> {
        let reserved = self.reserved_cells();
        let attempts = self.ruleset.max_generation_attempts;

        for attempt in 1..=attempts {
            let mut grid = Grid::new(self.ruleset.width, self.ruleset.height);
            scatter_walls(&mut grid, rng, wall_count, &reserved);

            if let Some(key) = self.sample_key(&grid, rng, &reserved) {
                debug!("accepted layout on attempt {attempt} with key at {key}");
                return Ok((grid, key));
            }
            debug!("discarding unsolvable layout on attempt {attempt}");
        }

        Err(GenerationError::Exhausted { attempts })
    }

    fn sample_key<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        rng: &mut R,
        reserved: &[Pos],
    ) -> Option<Pos> {
        let candidates: Vec<Pos> =
            grid.floor_cells().filter(|pos| !reserved.contains(pos)).collect();
        for _ in 0..self.ruleset.key_samples_per_attempt {
            let key = choose(rng, &candidates)?;
            if self.is_solvable(grid, key) {
                return Some(key);
            }
        }
        None
    }

    fn is_solvable(&self, grid: &Grid, key: Pos) -> bool {
        grid.is_floor(key)
            && reachable(grid, self.ruleset.player_start(), key)
            && reachable(grid, key, self.ruleset.exit())
    }
}

fn free_cells(grid: &Grid, landmarks: &[Pos]) -> Vec<Pos> {
    grid.floor_cells()
        .filter(|pos| !landmarks.contains(pos) && !grid.has_obstacle(*pos))
        .collect()
}

fn place_obstacles<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    requested: usize,
    landmarks: &[Pos],
) {
    if requested == 0 {
        return;
    }
    let candidates = free_cells(grid, landmarks);
    if candidates.len() < requested {
        debug!("skipping obstacles: {requested} requested, {} free cells", candidates.len());
        return;
    }
    for pos in sample_distinct(rng, candidates, requested) {
        grid.set_obstacle(pos, true);
    }
}
