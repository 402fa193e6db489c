//! Breadth-first connectivity oracle over wall-only passability.
//! This module exists so solvability checks share one search with tests and tools.
//! It does not know about obstacles; those are placed after a layout is accepted.

use std::collections::{BTreeSet, VecDeque};

use crate::state::Grid;
use crate::types::{Direction, Pos};

pub fn reachable(grid: &Grid, start: Pos, goal: Pos) -> bool {
    if start == goal {
        return true;
    }
    if !grid.is_floor(start) {
        return false;
    }

    let mut visited = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return true;
        }
        for next in neighbors(current) {
            if grid.is_floor(next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    false
}

fn neighbors(pos: Pos) -> [Pos; 4] {
    Direction::ALL.map(|direction| pos.step(direction))
}
