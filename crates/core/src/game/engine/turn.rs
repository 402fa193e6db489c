//! Single-move resolution: validate, commit, advance the pursuer, resolve events.

use super::*;
use crate::game::pursuer::advance_pursuer;

impl GameSession {
    pub fn submit_move(&mut self, direction: Direction) -> SessionView {
        self.record(InputPayload::Move { direction });
        self.apply_move(direction);
        self.view()
    }

    /// One player action. Blocked moves only set a message; terminal sessions ignore input.
    pub(crate) fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.is_terminal() {
            return MoveOutcome::Ignored;
        }

        let target = self.state.player.step(direction);
        let blocked_by_obstacles = self.ruleset.pursuer_blocked_by_obstacles;
        if !self.state.grid.is_passable(target, Actor::Player, blocked_by_obstacles) {
            self.message = Some(Message::Blocked);
            return MoveOutcome::Blocked;
        }

        self.state.player = target;
        self.message = None;
        self.turn_count += 1;

        let report = advance_pursuer(
            &mut self.state,
            self.difficulty,
            self.turn_count,
            blocked_by_obstacles,
        );
        if let Some(message) = report.message() {
            self.message = Some(message);
        }
        self.resolve_events();
        MoveOutcome::Accepted
    }
}
