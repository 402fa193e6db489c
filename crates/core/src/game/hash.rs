//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from turn resolution.
//! It does not cover wall-clock timers, which differ between otherwise identical runs.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl GameSession {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u32(self.turn_count);
        hasher.write_u32(self.clear_count);
        hasher.write_u8(self.difficulty as u8);
        hasher.write_u8(self.trap_charges);
        hasher.write_u8(u8::from(self.game_over));
        hasher.write_u8(u8::from(self.win));

        let state = &self.state;
        write_pos(&mut hasher, state.player);
        write_pos(&mut hasher, state.pursuer.pos);
        hasher.write_u8(state.pursuer.stun_turns_remaining);
        match state.key {
            Some(key) => {
                hasher.write_u8(1);
                write_pos(&mut hasher, key);
            }
            None => hasher.write_u8(0),
        }
        hasher.write_u8(u8::from(state.has_key));
        write_pos(&mut hasher, state.exit);

        let mut traps: Vec<(Pos, TrapOrigin)> =
            state.traps.values().map(|trap| (trap.pos, trap.origin)).collect();
        traps.sort_by_key(|(pos, _)| *pos);
        hasher.write_usize(traps.len());
        for (pos, origin) in traps {
            write_pos(&mut hasher, pos);
            hasher.write_u8(origin as u8);
        }

        for pos in state.grid.floor_cells() {
            write_pos(&mut hasher, pos);
            hasher.write_u8(u8::from(state.grid.has_obstacle(pos)));
        }
        hasher.finish()
    }
}

fn write_pos(hasher: &mut Xxh3, pos: Pos) {
    hasher.write_i32(pos.x);
    hasher.write_i32(pos.y);
}
