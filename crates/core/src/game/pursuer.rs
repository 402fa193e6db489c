//! Pursuer movement: greedy axis-priority chase, difficulty cadence, and trap stuns.
//! This module exists to keep chase rules testable without a full session.
//! It does not decide win/loss; the event resolver reads the resulting positions.

use log::debug;

use crate::state::{GameState, Grid};
use crate::types::{Actor, Difficulty, Direction, Message, Pos};

pub const TRAP_STUN_TURNS: u8 = 3;

/// What the pursuer did during one advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PursuerReport {
    Idle,
    Moved { steps: u8 },
    Caught,
    Trapped,
    StillStunned { remaining: u8 },
    BrokeFree,
}

impl PursuerReport {
    pub fn message(self) -> Option<Message> {
        match self {
            PursuerReport::Idle | PursuerReport::Moved { .. } => None,
            PursuerReport::Caught => Some(Message::Caught),
            PursuerReport::Trapped => Some(Message::PursuerTrapped),
            PursuerReport::StillStunned { remaining } => {
                Some(Message::PursuerStillStunned { remaining })
            }
            PursuerReport::BrokeFree => Some(Message::PursuerBrokeFree),
        }
    }
}

/// Runs the pursuer for one accepted player turn. `turn_count` is the already-incremented count.
pub(crate) fn advance_pursuer(
    state: &mut GameState,
    difficulty: Difficulty,
    turn_count: u32,
    blocked_by_obstacles: bool,
) -> PursuerReport {
    if state.pursuer.stun_turns_remaining > 0 {
        state.pursuer.stun_turns_remaining -= 1;
        return match state.pursuer.stun_turns_remaining {
            0 => PursuerReport::BrokeFree,
            remaining => PursuerReport::StillStunned { remaining },
        };
    }

    let steps = difficulty.profile().cadence.steps_for_turn(turn_count);
    let mut moved = 0;
    for _ in 0..steps {
        if state.pursuer.pos == state.player {
            return PursuerReport::Caught;
        }
        let Some(next) =
            step_toward(&state.grid, state.pursuer.pos, state.player, blocked_by_obstacles)
        else {
            break;
        };
        state.pursuer.pos = next;
        moved += 1;

        if next == state.player {
            return PursuerReport::Caught;
        }
        if let Some(trap) = state.trap_at(next) {
            state.traps.remove(trap);
            state.pursuer.stun_turns_remaining = TRAP_STUN_TURNS;
            debug!("pursuer triggered trap at {next}");
            return PursuerReport::Trapped;
        }
    }

    if moved == 0 { PursuerReport::Idle } else { PursuerReport::Moved { steps: moved } }
}

/// First passable cell among the chase candidates, or `None` when boxed in.
pub fn step_toward(grid: &Grid, from: Pos, target: Pos, blocked_by_obstacles: bool) -> Option<Pos> {
    chase_candidates(from, target)
        .map(|direction| from.step(direction))
        .find(|&pos| grid.is_passable(pos, Actor::Pursuer, blocked_by_obstacles))
}

/// Primary toward, secondary toward, primary away, secondary away.
/// The x axis is primary only when strictly farther than y.
fn chase_candidates(from: Pos, target: Pos) -> impl Iterator<Item = Direction> {
    let dx = target.x - from.x;
    let dy = target.y - from.y;
    let horizontal = match dx {
        0 => None,
        d if d > 0 => Some(Direction::Right),
        _ => Some(Direction::Left),
    };
    let vertical = match dy {
        0 => None,
        d if d > 0 => Some(Direction::Down),
        _ => Some(Direction::Up),
    };
    let (primary, secondary) =
        if dx.abs() > dy.abs() { (horizontal, vertical) } else { (vertical, horizontal) };

    [primary, secondary, primary.map(Direction::opposite), secondary.map(Direction::opposite)]
        .into_iter()
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::chase_state;
    use crate::types::{TileKind, TrapOrigin};

    #[test]
    fn pursuer_closes_along_the_longer_axis() {
        let mut state = chase_state(Grid::new(10, 10), Pos::new(5, 1), Pos::new(5, 5));
        let report = advance_pursuer(&mut state, Difficulty::Normal, 1, false);
        assert_eq!(report, PursuerReport::Moved { steps: 1 });
        assert_eq!(state.pursuer.pos, Pos::new(5, 4));
    }

    #[test]
    fn equal_distances_prefer_the_vertical_axis() {
        let grid = Grid::new(10, 10);
        assert_eq!(step_toward(&grid, Pos::new(4, 4), Pos::new(2, 2), false), Some(Pos::new(4, 3)));
        assert_eq!(step_toward(&grid, Pos::new(4, 4), Pos::new(7, 1), false), Some(Pos::new(4, 3)));
        assert_eq!(step_toward(&grid, Pos::new(4, 4), Pos::new(8, 2), false), Some(Pos::new(5, 4)));
    }

    #[test]
    fn blocked_primary_falls_back_to_secondary_then_away() {
        let mut grid = Grid::new(10, 10);
        grid.set_tile(Pos::new(4, 4), TileKind::Wall);
        // Target is up-left with a longer x gap; left is walled so the pursuer goes up.
        assert_eq!(step_toward(&grid, Pos::new(5, 4), Pos::new(1, 2), false), Some(Pos::new(5, 3)));

        // Target straight left: no vertical candidate, so the only fallback is moving away.
        assert_eq!(step_toward(&grid, Pos::new(5, 4), Pos::new(1, 4), false), Some(Pos::new(6, 4)));
    }

    #[test]
    fn boxed_in_pursuer_stays_put() {
        let mut grid = Grid::new(7, 7);
        for pos in [Pos::new(2, 3), Pos::new(4, 3), Pos::new(3, 2), Pos::new(3, 4)] {
            grid.set_tile(pos, TileKind::Wall);
        }
        let mut state = chase_state(grid, Pos::new(1, 1), Pos::new(3, 3));
        let report = advance_pursuer(&mut state, Difficulty::Hard, 1, false);
        assert_eq!(report, PursuerReport::Idle);
        assert_eq!(state.pursuer.pos, Pos::new(3, 3));
    }

    #[test]
    fn obstacle_policy_controls_pursuer_passability() {
        let mut grid = Grid::new(7, 7);
        grid.set_obstacle(Pos::new(3, 2), true);
        assert_eq!(step_toward(&grid, Pos::new(3, 3), Pos::new(3, 1), false), Some(Pos::new(3, 2)));
        // Straight-line target: with the obstacle blocking, the only option is backing off.
        assert_eq!(step_toward(&grid, Pos::new(3, 3), Pos::new(3, 1), true), Some(Pos::new(3, 4)));
    }

    #[test]
    fn hard_pursuer_takes_two_steps_and_easy_waits_on_odd_turns() {
        let mut hard = chase_state(Grid::new(10, 10), Pos::new(1, 1), Pos::new(1, 8));
        assert_eq!(advance_pursuer(&mut hard, Difficulty::Hard, 1, false), PursuerReport::Moved {
            steps: 2
        });
        assert_eq!(hard.pursuer.pos, Pos::new(1, 6));

        let mut easy = chase_state(Grid::new(10, 10), Pos::new(1, 1), Pos::new(1, 8));
        assert_eq!(advance_pursuer(&mut easy, Difficulty::Easy, 1, false), PursuerReport::Idle);
        assert_eq!(easy.pursuer.pos, Pos::new(1, 8));
        assert_eq!(advance_pursuer(&mut easy, Difficulty::Easy, 2, false), PursuerReport::Moved {
            steps: 1
        });
        assert_eq!(easy.pursuer.pos, Pos::new(1, 7));
    }

    #[test]
    fn hard_pursuer_stops_after_capturing_on_first_step() {
        let mut state = chase_state(Grid::new(10, 10), Pos::new(1, 3), Pos::new(1, 4));
        assert_eq!(advance_pursuer(&mut state, Difficulty::Hard, 1, false), PursuerReport::Caught);
        assert_eq!(state.pursuer.pos, Pos::new(1, 3));
    }

    #[test]
    fn trap_stun_lasts_exactly_three_advances() {
        let mut state = chase_state(Grid::new(10, 10), Pos::new(1, 1), Pos::new(1, 5));
        state.add_trap(Pos::new(1, 4), TrapOrigin::PlayerPlaced);

        assert_eq!(advance_pursuer(&mut state, Difficulty::Hard, 1, false), PursuerReport::Trapped);
        assert_eq!(state.pursuer.pos, Pos::new(1, 4), "second hard step is skipped");
        assert!(state.traps.is_empty(), "trap is consumed");
        assert_eq!(state.pursuer.stun_turns_remaining, TRAP_STUN_TURNS);

        let reports: Vec<PursuerReport> = (2..=4)
            .map(|turn| advance_pursuer(&mut state, Difficulty::Hard, turn, false))
            .collect();
        assert_eq!(reports, vec![
            PursuerReport::StillStunned { remaining: 2 },
            PursuerReport::StillStunned { remaining: 1 },
            PursuerReport::BrokeFree,
        ]);
        assert_eq!(state.pursuer.pos, Pos::new(1, 4), "no movement while stunned");

        assert_eq!(advance_pursuer(&mut state, Difficulty::Normal, 5, false), PursuerReport::Moved {
            steps: 1
        });
        assert_eq!(state.pursuer.pos, Pos::new(1, 3));
    }

    #[test]
    fn capture_wins_over_a_trap_on_the_same_cell() {
        let mut state = chase_state(Grid::new(10, 10), Pos::new(1, 3), Pos::new(1, 4));
        state.add_trap(Pos::new(1, 3), TrapOrigin::PlayerPlaced);

        let report = advance_pursuer(&mut state, Difficulty::Normal, 1, false);
        assert_eq!(report, PursuerReport::Caught);
        assert_eq!(state.pursuer.stun_turns_remaining, 0);
        assert_eq!(state.traps.len(), 1, "trap is left untouched");
    }

    #[test]
    fn reports_map_to_player_messages() {
        assert_eq!(PursuerReport::Moved { steps: 2 }.message(), None);
        assert_eq!(
            PursuerReport::StillStunned { remaining: 1 }.message(),
            Some(Message::PursuerStillStunned { remaining: 1 })
        );
        assert_eq!(PursuerReport::BrokeFree.message(), Some(Message::PursuerBrokeFree));
    }
}
