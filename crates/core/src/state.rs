use slotmap::SlotMap;

use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
    obstacles: Vec<bool>,
}

impl Grid {
    /// Open floor surrounded by a one-cell wall ring.
    pub fn new(width: usize, height: usize) -> Self {
        let mut tiles = vec![TileKind::Floor; width * height];
        for x in 0..width {
            tiles[x] = TileKind::Wall;
            tiles[(height - 1) * width + x] = TileKind::Wall;
        }
        for y in 0..height {
            tiles[y * width] = TileKind::Wall;
            tiles[y * width + (width - 1)] = TileKind::Wall;
        }
        Self { width, height, tiles, obstacles: vec![false; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        pos.x == 0
            || pos.y == 0
            || pos.x as usize == self.width - 1
            || pos.y as usize == self.height - 1
    }

    /// Interior writes only; the outer ring always stays wall.
    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) || self.is_border(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn has_obstacle(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.obstacles[self.index(pos)]
    }

    pub fn set_obstacle(&mut self, pos: Pos, present: bool) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.obstacles[idx] = present;
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.iter().filter(|&&present| present).count()
    }

    /// Wall-only passability, as used by solvability checks.
    pub fn is_floor(&self, pos: Pos) -> bool {
        self.tile_at(pos) == TileKind::Floor
    }

    pub fn is_passable(&self, pos: Pos, actor: Actor, pursuer_blocked_by_obstacles: bool) -> bool {
        if !self.is_floor(pos) {
            return false;
        }
        if !self.has_obstacle(pos) {
            return true;
        }
        match actor {
            Actor::Player => false,
            Actor::Pursuer => !pursuer_blocked_by_obstacles,
        }
    }

    /// Interior floor cells in row-major order.
    pub fn floor_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (1..self.height.saturating_sub(1)).flat_map(move |y| {
            (1..self.width.saturating_sub(1))
                .map(move |x| Pos { y: y as i32, x: x as i32 })
                .filter(|&pos| self.is_floor(pos))
        })
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trap {
    pub id: TrapId,
    pub pos: Pos,
    pub origin: TrapOrigin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pursuer {
    pub pos: Pos,
    pub stun_turns_remaining: u8,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: Grid,
    pub player: Pos,
    pub pursuer: Pursuer,
    pub key: Option<Pos>,
    pub exit: Pos,
    pub has_key: bool,
    pub traps: SlotMap<TrapId, Trap>,
}

impl GameState {
    pub fn exit_locked(&self) -> bool {
        !self.has_key
    }

    pub fn trap_at(&self, pos: Pos) -> Option<TrapId> {
        self.traps.iter().find(|(_, trap)| trap.pos == pos).map(|(id, _)| id)
    }

    pub fn player_trap_active(&self) -> bool {
        self.traps.values().any(|trap| trap.origin == TrapOrigin::PlayerPlaced)
    }

    pub fn add_trap(&mut self, pos: Pos, origin: TrapOrigin) -> TrapId {
        let id = self.traps.insert(Trap { id: TrapId::default(), pos, origin });
        self.traps[id].id = id;
        id
    }
}
