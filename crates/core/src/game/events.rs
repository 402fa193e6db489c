//! Post-turn event resolution: capture, key pickup, and the exit door.

use log::info;

use super::*;

impl GameSession {
    /// Applies the highest-priority event for the current positions.
    /// Calling it again without moving anyone changes nothing further.
    pub fn resolve_events(&mut self) -> Option<TurnEvent> {
        let player = self.state.player;

        if self.state.pursuer.pos == player {
            if !self.game_over {
                info!("caught at {player} on turn {}", self.turn_count);
            }
            self.game_over = true;
            self.message = Some(Message::Caught);
            self.record_end();
            return Some(TurnEvent::Caught);
        }

        if self.state.key == Some(player) {
            self.state.key = None;
            self.state.has_key = true;
            self.message = Some(Message::FoundKey);
            return Some(TurnEvent::KeyCollected);
        }

        if player == self.state.exit {
            if self.state.exit_locked() {
                self.message = Some(Message::DoorLocked);
                return Some(TurnEvent::DoorLocked);
            }
            self.win = true;
            self.message = Some(Message::Escaped);
            if !self.win_counted {
                self.win_counted = true;
                self.clear_count += 1;
                info!("escaped on turn {}, clears now {}", self.turn_count, self.clear_count);
            }
            self.record_end();
            return Some(TurnEvent::Escaped);
        }

        None
    }
}
