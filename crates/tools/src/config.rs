//! Optional TOML settings shared by the binaries. CLI flags override file values.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::ValueEnum;
use escape_core::{Difficulty, Ruleset, SessionConfig};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Unset means a fresh seed per run.
    pub seed: Option<u64>,
    pub difficulty: Difficulty,
    pub clear_count: u32,
    pub ruleset: Ruleset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Normal,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Normal => Difficulty::Normal,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// Command-line values that win over the file.
#[derive(Clone, Copy, Debug, Default)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub difficulty: Option<DifficultyArg>,
    pub clear_count: Option<u32>,
    pub classic: bool,
}

impl ToolConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: ToolConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .ruleset
            .validate()
            .with_context(|| format!("Invalid ruleset in {}", path.display()))?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise starts from defaults, then applies CLI overrides.
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if overrides.seed.is_some() {
            config.seed = overrides.seed;
        }
        if let Some(difficulty) = overrides.difficulty {
            config.difficulty = difficulty.into();
        }
        if let Some(clear_count) = overrides.clear_count {
            config.clear_count = clear_count;
        }
        if overrides.classic {
            config.ruleset = Ruleset::classic();
        }
        Ok(config)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            seed: self.seed.unwrap_or_else(time_seed),
            ruleset: self.ruleset.clone(),
            difficulty: self.difficulty,
            clear_count: self.clear_count,
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|since| since.as_nanos() as u64).unwrap_or(0)
}
