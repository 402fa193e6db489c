//! Thread-safe handle for shells that accept input from more than one place.
//! A submission that arrives while another is in flight is rejected, never interleaved.

use std::sync::{Mutex, TryLockError};

use super::*;

#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedSession {
    pub fn new(session: GameSession) -> Self {
        Self { inner: Arc::new(Mutex::new(session)) }
    }

    pub fn submit_move(&self, direction: Direction) -> Result<SessionView, GameError> {
        self.with_session(|session| session.submit_move(direction))
    }

    pub fn submit_bulk_moves(&self, sequence: &str) -> Result<SessionView, GameError> {
        self.with_session(|session| session.submit_bulk_moves(sequence))
    }

    pub fn place_trap(&self) -> Result<SessionView, GameError> {
        self.with_session(GameSession::place_trap)
    }

    pub fn restart(&self) -> Result<SessionView, GameError> {
        self.with_session(|session| session.restart().map_err(GameError::from))?
    }

    pub fn set_difficulty(&self, difficulty: Difficulty) -> Result<SessionView, GameError> {
        self.with_session(|session| session.set_difficulty(difficulty))?
    }

    pub fn view(&self) -> Result<SessionView, GameError> {
        self.with_session(|session| session.view())
    }

    fn with_session<T>(&self, action: impl FnOnce(&mut GameSession) -> T) -> Result<T, GameError> {
        let mut guard = match self.inner.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => return Err(GameError::SessionBusy),
        };
        Ok(action(&mut guard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    #[test]
    fn submissions_pass_through_to_the_session() {
        let (session, _clock) = open_room_session(Difficulty::Normal);
        let shared = SharedSession::new(session);

        let view = shared.submit_move(Direction::Right).expect("lock should be free");
        assert_eq!(view.turn_count, 1);
        assert_eq!(shared.view().expect("lock should be free").turn_count, 1);
    }

    #[test]
    fn concurrent_submission_is_rejected_as_busy() {
        let (session, _clock) = open_room_session(Difficulty::Normal);
        let shared = SharedSession::new(session);
        let other = shared.clone();

        let _held = shared.inner.lock().expect("lock should not be poisoned");
        assert_eq!(other.submit_move(Direction::Right), Err(GameError::SessionBusy));
        assert_eq!(other.place_trap(), Err(GameError::SessionBusy));
    }
}
