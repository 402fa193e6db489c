//! Public data model for a generated map and its landmark cells.

use crate::state::Grid;
use crate::types::{Pos, TileKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMap {
    pub grid: Grid,
    pub player_start: Pos,
    pub pursuer_start: Pos,
    pub key: Pos,
    pub exit: Pos,
    pub preplaced_traps: Vec<Pos>,
}

impl GeneratedMap {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.grid.width() as u32).to_le_bytes());
        bytes.extend((self.grid.height() as u32).to_le_bytes());
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let pos = Pos { y: y as i32, x: x as i32 };
                bytes.push(match self.grid.tile_at(pos) {
                    TileKind::Wall => 0,
                    TileKind::Floor => 1,
                });
                bytes.push(u8::from(self.grid.has_obstacle(pos)));
            }
        }
        for pos in [self.player_start, self.pursuer_start, self.key, self.exit] {
            bytes.extend(pos.y.to_le_bytes());
            bytes.extend(pos.x.to_le_bytes());
        }
        bytes.extend((self.preplaced_traps.len() as u32).to_le_bytes());
        for trap in &self.preplaced_traps {
            bytes.extend(trap.y.to_le_bytes());
            bytes.extend(trap.x.to_le_bytes());
        }
        bytes
    }
}
