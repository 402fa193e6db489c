//! Ruleset configuration shared by map generation and turn resolution.
//! This module exists so per-variant behaviour is data instead of scattered conditionals.
//! It does not own difficulty pacing, which lives on `Difficulty::profile`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Pos;

pub const CLASSIC_WIDTH: usize = 15;
pub const CLASSIC_HEIGHT: usize = 10;
pub const CLASSIC_KEY: Pos = Pos::new(7, 7);

const MIN_SIDE: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutStrategy {
    /// Hand-drawn interior box with a fixed key cell.
    Classic,
    /// Randomly scattered interior walls, validated by reachability search.
    Scattered { wall_count: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    pub width: usize,
    pub height: usize,
    pub layout: LayoutStrategy,
    pub obstacle_cap: usize,
    pub pursuer_blocked_by_obstacles: bool,
    pub traps_enabled: bool,
    pub randomize_pursuer_corner: bool,
    pub max_generation_attempts: u32,
    pub key_samples_per_attempt: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesetError {
    #[error("grid must be at least {min}x{min}, got {width}x{height}", min = MIN_SIDE)]
    GridTooSmall { width: usize, height: usize },

    #[error("classic layout requires a {w}x{h} grid", w = CLASSIC_WIDTH, h = CLASSIC_HEIGHT)]
    ClassicSizeMismatch,

    #[error("{wall_count} interior walls leave no room to move on a {width}x{height} grid")]
    TooManyWalls { wall_count: usize, width: usize, height: usize },

    #[error("generation attempts and key samples must both be at least 1")]
    ZeroGenerationBudget,
}

impl Ruleset {
    /// Fixed walls, fixed key, obstacles stop the pursuer, no traps.
    pub fn classic() -> Self {
        Self {
            width: CLASSIC_WIDTH,
            height: CLASSIC_HEIGHT,
            layout: LayoutStrategy::Classic,
            obstacle_cap: 15,
            pursuer_blocked_by_obstacles: true,
            traps_enabled: false,
            randomize_pursuer_corner: false,
            max_generation_attempts: 1,
            key_samples_per_attempt: 1,
        }
    }

    /// Scattered walls with BFS validation, traps, and a pursuer that ignores obstacles.
    pub fn canonical() -> Self {
        Self {
            width: CLASSIC_WIDTH,
            height: CLASSIC_HEIGHT,
            layout: LayoutStrategy::Scattered { wall_count: 20 },
            obstacle_cap: 40,
            pursuer_blocked_by_obstacles: false,
            traps_enabled: true,
            randomize_pursuer_corner: true,
            max_generation_attempts: 200,
            key_samples_per_attempt: 64,
        }
    }

    pub fn validate(&self) -> Result<(), RulesetError> {
        if self.width < MIN_SIDE || self.height < MIN_SIDE {
            return Err(RulesetError::GridTooSmall { width: self.width, height: self.height });
        }
        if self.max_generation_attempts == 0 || self.key_samples_per_attempt == 0 {
            return Err(RulesetError::ZeroGenerationBudget);
        }
        match self.layout {
            LayoutStrategy::Classic => {
                if self.width != CLASSIC_WIDTH || self.height != CLASSIC_HEIGHT {
                    return Err(RulesetError::ClassicSizeMismatch);
                }
            }
            LayoutStrategy::Scattered { wall_count } => {
                // Start, both corners, exit, and at least one key candidate stay open.
                let interior = (self.width - 2) * (self.height - 2);
                if wall_count + 5 > interior {
                    return Err(RulesetError::TooManyWalls {
                        wall_count,
                        width: self.width,
                        height: self.height,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn player_start(&self) -> Pos {
        Pos::new(1, 1)
    }

    pub fn exit(&self) -> Pos {
        Pos::new(self.width as i32 - 2, 1)
    }

    /// Bottom-right first; it is the only start when corners are not randomized.
    pub fn pursuer_corners(&self) -> [Pos; 2] {
        let bottom = self.height as i32 - 2;
        [Pos::new(self.width as i32 - 2, bottom), Pos::new(1, bottom)]
    }

    pub fn fixed_key(&self) -> Option<Pos> {
        match self.layout {
            LayoutStrategy::Classic => Some(CLASSIC_KEY),
            LayoutStrategy::Scattered { .. } => None,
        }
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        assert_eq!(Ruleset::classic().validate(), Ok(()));
        assert_eq!(Ruleset::canonical().validate(), Ok(()));
    }

    #[test]
    fn classic_layout_rejects_other_sizes() {
        let ruleset = Ruleset { width: 20, ..Ruleset::classic() };
        assert_eq!(ruleset.validate(), Err(RulesetError::ClassicSizeMismatch));
    }

    #[test]
    fn scattered_layout_rejects_wall_counts_that_fill_the_interior() {
        let ruleset = Ruleset {
            width: 5,
            height: 5,
            layout: LayoutStrategy::Scattered { wall_count: 5 },
            ..Ruleset::canonical()
        };
        assert!(matches!(ruleset.validate(), Err(RulesetError::TooManyWalls { .. })));
    }

    #[test]
    fn landmarks_are_distinct_interior_cells() {
        let ruleset = Ruleset { width: 5, height: 5, ..Ruleset::canonical() };
        let [right, left] = ruleset.pursuer_corners();
        let landmarks = [ruleset.player_start(), ruleset.exit(), right, left];
        for (index, a) in landmarks.iter().enumerate() {
            assert!(a.x >= 1 && a.y >= 1 && a.x <= 3 && a.y <= 3, "{a} should be interior");
            for b in &landmarks[index + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn partial_toml_style_input_falls_back_to_canonical_defaults() {
        let parsed: Ruleset =
            serde_json::from_str(r#"{"obstacle_cap": 35}"#).expect("partial ruleset should parse");
        assert_eq!(parsed, Ruleset { obstacle_cap: 35, ..Ruleset::canonical() });
    }
}
