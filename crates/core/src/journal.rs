use serde::{Deserialize, Serialize};

use crate::game::SessionConfig;
use crate::ruleset::Ruleset;
use crate::types::{Difficulty, Direction};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub ruleset: Ruleset,
    pub difficulty: Difficulty,
    pub clear_count: u32,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    Move { direction: Direction },
    BulkMove { sequence: String },
    PlaceTrap,
    Restart,
    SetDifficulty { difficulty: Difficulty },
}

impl InputJournal {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            seed: config.seed,
            ruleset: config.ruleset.clone(),
            difficulty: config.difficulty,
            clear_count: config.clear_count,
            inputs: Vec::new(),
        }
    }

    pub fn append(&mut self, payload: InputPayload) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, payload });
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            seed: self.seed,
            ruleset: self.ruleset.clone(),
            difficulty: self.difficulty,
            clear_count: self.clear_count,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
