//! Read-only snapshot returned to shells after every action.
//! This module exists so front-ends render from one value instead of poking at session internals.
//! It does not own any mutation; building a view never changes the session.

use super::*;

/// One rendered cell, already resolved through the overlay order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Wall,
    Floor,
    Obstacle,
    Trap,
    Key,
    ExitLocked,
    ExitUnlocked,
    Player,
    Pursuer,
}

impl Glyph {
    pub fn symbol(self) -> char {
        match self {
            Glyph::Wall => '#',
            Glyph::Floor => '.',
            Glyph::Obstacle => 'T',
            Glyph::Trap => '^',
            Glyph::Key => 'k',
            Glyph::ExitLocked => 'D',
            Glyph::ExitUnlocked => 'E',
            Glyph::Player => '@',
            Glyph::Pursuer => 'O',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionView {
    pub width: usize,
    pub height: usize,
    pub glyphs: Vec<Glyph>,
    pub message: Option<Message>,
    pub game_over: bool,
    pub win: bool,
    pub turn_count: u32,
    pub clear_count: u32,
    pub has_key: bool,
    pub trap_charges_remaining: u8,
    pub stun_turns_remaining: u8,
    pub difficulty: Difficulty,
    pub elapsed: Duration,
}

impl SessionView {
    pub fn glyph_at(&self, pos: Pos) -> Glyph {
        if pos.x < 0 || pos.y < 0 || pos.x as usize >= self.width || pos.y as usize >= self.height {
            return Glyph::Wall;
        }
        self.glyphs[pos.y as usize * self.width + pos.x as usize]
    }

    pub fn render_rows(&self) -> Vec<String> {
        self.glyphs
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|glyph| glyph.symbol()).collect())
            .collect()
    }
}

impl GameSession {
    pub fn view(&self) -> SessionView {
        let grid = &self.state.grid;
        let (width, height) = (grid.width(), grid.height());
        let mut glyphs = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                glyphs.push(self.glyph_for(Pos { y: y as i32, x: x as i32 }));
            }
        }

        SessionView {
            width,
            height,
            glyphs,
            message: self.message,
            game_over: self.game_over,
            win: self.win,
            turn_count: self.turn_count,
            clear_count: self.clear_count,
            has_key: self.state.has_key,
            trap_charges_remaining: self.trap_charges,
            stun_turns_remaining: self.state.pursuer.stun_turns_remaining,
            difficulty: self.difficulty,
            elapsed: self.elapsed(),
        }
    }

    // Later layers win: base, trap, key, exit, player, pursuer.
    fn glyph_for(&self, pos: Pos) -> Glyph {
        let state = &self.state;
        if state.pursuer.pos == pos {
            return Glyph::Pursuer;
        }
        if state.player == pos {
            return Glyph::Player;
        }
        if state.exit == pos {
            return if state.exit_locked() { Glyph::ExitLocked } else { Glyph::ExitUnlocked };
        }
        if state.key == Some(pos) {
            return Glyph::Key;
        }
        if state.trap_at(pos).is_some() {
            return Glyph::Trap;
        }
        if !state.grid.is_floor(pos) {
            Glyph::Wall
        } else if state.grid.has_obstacle(pos) {
            Glyph::Obstacle
        } else {
            Glyph::Floor
        }
    }
}
