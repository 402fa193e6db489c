//! Player trap placement.

use super::*;

impl GameSession {
    /// Sets a trap under the player. Never consumes a turn.
    pub fn place_trap(&mut self) -> SessionView {
        self.record(InputPayload::PlaceTrap);
        self.apply_place_trap();
        self.view()
    }

    pub(crate) fn apply_place_trap(&mut self) -> TrapPlacement {
        if self.is_terminal() {
            return TrapPlacement::Ignored;
        }

        let placement = if progression::player_trap_charges(&self.ruleset, self.difficulty) == 0 {
            TrapPlacement::Unavailable
        } else if self.state.player_trap_active() || self.state.trap_at(self.state.player).is_some()
        {
            TrapPlacement::AlreadySet
        } else if self.trap_charges == 0 {
            TrapPlacement::NoCharges
        } else {
            self.trap_charges -= 1;
            self.state.add_trap(self.state.player, TrapOrigin::PlayerPlaced);
            TrapPlacement::Placed
        };

        self.message = Some(match placement {
            TrapPlacement::Placed => Message::TrapPlaced,
            TrapPlacement::AlreadySet => Message::TrapAlreadySet,
            TrapPlacement::NoCharges => Message::NoTrapCharges,
            TrapPlacement::Unavailable | TrapPlacement::Ignored => Message::TrapsUnavailable,
        });
        placement
    }
}
