//! Restart and difficulty selection.

use log::info;

use super::*;

impl GameSession {
    /// New map from the continuing seed stream; clears and difficulty carry over.
    /// A failed attempt leaves the board as it was but still draws from the stream,
    /// so it is journaled like a successful one.
    pub fn restart(&mut self) -> Result<SessionView, GenerationError> {
        self.record(InputPayload::Restart);
        self.regenerate()?;
        info!("restarted: difficulty={} clears={}", self.difficulty, self.clear_count);
        Ok(self.view())
    }

    /// Only allowed before the first accepted move; regenerates the map for the new profile.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<SessionView, GameError> {
        if self.difficulty_locked() {
            return Err(GameError::DifficultyLocked);
        }
        self.record(InputPayload::SetDifficulty { difficulty });
        let previous = self.difficulty;
        self.difficulty = difficulty;
        if let Err(err) = self.regenerate() {
            self.difficulty = previous;
            return Err(err.into());
        }
        Ok(self.view())
    }
}
