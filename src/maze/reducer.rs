//! Comblement des culs-de-sac jusqu'au point fixe.

use crate::maze::cell::Cell;
use crate::maze::grid::Grid;

/// Mure tous les culs-de-sac de chemin, passe après passe, jusqu'à ce qu'une
/// passe complète ne change plus rien. Le départ et l'arrivée restent en place
/// même s'ils sont eux-mêmes des culs-de-sac.
///
/// Retourne le nombre de cases murées.
pub fn fill_dead_ends(grid: &mut Grid) -> usize {
    let mut filled = 0;
    let mut passes = 0;
    loop {
        passes += 1;
        let before = filled;
        let positions: Vec<_> = grid.interior().collect();
        for pos in positions {
            // `fill_path` refuse les ancres, qui peuvent rester des culs-de-sac
            if grid.is_dead_end(pos) && grid.fill_path(pos) {
                filled += 1;
            }
        }
        if filled == before {
            break;
        }
    }
    log::debug!("dead-end fill: {} cells walled in {} passes", filled, passes);
    filled
}

/// Mure tout le chemin qui n'est pas relié au départ.
///
/// Retourne le nombre de cases murées.
pub fn fill_unreachable(grid: &mut Grid) -> usize {
    let reachable = grid.reachable_from(grid.start());
    let unreachable: Vec<_> = grid
        .find_all(Cell::Path)
        .into_iter()
        .filter(|pos| !reachable.contains(pos))
        .collect();
    let filled = unreachable
        .into_iter()
        .filter(|pos| grid.fill_path(*pos))
        .count();
    log::debug!("unreachable fill: {} cells walled", filled);
    filled
}

/// Variante par valeur de [`fill_dead_ends`].
pub fn reduce(mut grid: Grid) -> Grid {
    fill_dead_ends(&mut grid);
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::fixtures;
    use crate::maze::grid::Position;

    #[test]
    fn test_fill_in_dead_ends_without_loops() {
        let grid = reduce(fixtures::t_junction());
        // il ne reste que le départ et l'arrivée comme culs-de-sac
        assert_eq!(grid.count_dead_ends(), 2);
        assert_eq!(grid.count_branches(), 0);
        assert_eq!(grid.get(Position::new(1, 1)), Some(Cell::Wall));
        assert_eq!(grid.get(Position::new(3, 5)), Some(Cell::Wall));
        assert_eq!(grid.count_kind(Cell::Path), 5);
    }

    #[test]
    fn test_fill_in_dead_ends_keeps_loops() {
        let grid = reduce(fixtures::ring_with_spurs());
        assert_eq!(grid.count_dead_ends(), 2);
        // l'anneau survit
        assert_eq!(grid.count_branches(), 2);
    }

    #[test]
    fn test_fill_in_dead_ends_anchor_free_loop() {
        let grid = reduce(fixtures::ring_through_anchors());
        assert_eq!(grid.count_dead_ends(), 0);
        assert_eq!(grid, fixtures::ring_through_anchors());
    }

    #[test]
    fn test_reduce_is_idempotent() {
        for grid in fixtures::all() {
            let once = reduce(grid);
            let mut twice = once.clone();
            assert_eq!(fill_dead_ends(&mut twice), 0);
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn test_reduce_is_monotone_and_keeps_anchors() {
        for grid in fixtures::all() {
            let before = grid.count_kind(Cell::Path);
            let walls_before = grid.count_kind(Cell::Wall);
            let reduced = reduce(grid.clone());
            assert!(reduced.count_kind(Cell::Path) <= before);
            assert_eq!(
                reduced.count_kind(Cell::Wall) - walls_before,
                before - reduced.count_kind(Cell::Path)
            );
            assert_eq!(reduced.get(grid.start()), Some(Cell::Start));
            assert_eq!(reduced.get(grid.dest()), Some(Cell::Dest));
        }
    }

    #[test]
    fn test_fill_unreachable_area() {
        let mut grid = fixtures::detached_loop();
        assert_eq!(grid.count_branches(), 8);
        assert_eq!(fill_dead_ends(&mut grid), 0);
        assert_eq!(fill_unreachable(&mut grid), 18);
        assert_eq!(grid.count_branches(), 0);
        assert_eq!(grid.count_kind(Cell::Path), 5);
        assert_eq!(fill_unreachable(&mut grid), 0);
    }

    #[test]
    fn test_fill_unreachable_from_enclosed_start() {
        let mut grid = fixtures::enclosed_start_with_loop();
        fill_unreachable(&mut grid);
        assert_eq!(grid.count_kind(Cell::Path), 0);
        assert!(grid.is_walled_in(grid.dest()));
        assert_eq!(grid.get(grid.dest()), Some(Cell::Dest));
    }

    #[test]
    fn test_enclosed_anchor_is_kept() {
        let grid = reduce(fixtures::enclosed_start());
        assert_eq!(grid.get(grid.start()), Some(Cell::Start));
        assert!(grid.is_walled_in(grid.start()));
        // plus aucun chemin : l'arrivée est elle aussi emmurée
        assert_eq!(grid.count_kind(Cell::Path), 0);
        assert!(grid.is_walled_in(grid.dest()));
    }
}
