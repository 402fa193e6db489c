//! Interior wall layouts: the fixed classic box and randomly scattered walls.

use rand_chacha::rand_core::Rng;

use crate::state::Grid;
use crate::types::{Pos, TileKind};

use super::sampling::sample_distinct;

pub(super) fn carve_classic_walls(grid: &mut Grid) {
    for x in 3..=7 {
        grid.set_tile(Pos::new(x, 3), TileKind::Wall);
        grid.set_tile(Pos::new(x, 6), TileKind::Wall);
    }
    for y in 3..=6 {
        grid.set_tile(Pos::new(3, y), TileKind::Wall);
        grid.set_tile(Pos::new(7, y), TileKind::Wall);
    }
}

pub(super) fn scatter_walls<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    wall_count: usize,
    reserved: &[Pos],
) {
    let candidates: Vec<Pos> = grid.floor_cells().filter(|pos| !reserved.contains(pos)).collect();
    for pos in sample_distinct(rng, candidates, wall_count) {
        grid.set_tile(pos, TileKind::Wall);
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn classic_box_encloses_its_interior() {
        let mut grid = Grid::new(15, 10);
        carve_classic_walls(&mut grid);
        assert_eq!(grid.tile_at(Pos::new(5, 3)), TileKind::Wall);
        assert_eq!(grid.tile_at(Pos::new(7, 5)), TileKind::Wall);
        assert_eq!(grid.tile_at(Pos::new(5, 4)), TileKind::Floor);
        assert_eq!(grid.floor_cells().count(), 13 * 8 - 14);
    }

    #[test]
    fn scattered_walls_skip_reserved_cells() {
        let mut grid = Grid::new(6, 6);
        let reserved = [Pos::new(1, 1), Pos::new(4, 4)];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        scatter_walls(&mut grid, &mut rng, 14, &reserved);

        assert!(reserved.iter().all(|&pos| grid.is_floor(pos)));
        assert_eq!(grid.floor_cells().count(), 2);
    }
}
