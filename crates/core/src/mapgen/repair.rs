//! Connectivity repair: stitch every open region back to the start cell.

use std::collections::VecDeque;

use log::debug;

use crate::types::{Cell, Pos};

use super::grid::MazeGrid;

/// Open cells reachable from `from` through 4-neighbour moves, indexed row-major.
pub(super) fn reachable_from(grid: &MazeGrid, from: Pos) -> Vec<bool> {
    let mut seen = vec![false; grid.cells().len()];
    let Some(origin) = grid.index(from).filter(|_| grid.get(from).is_open()) else {
        return seen;
    };
    seen[origin] = true;
    let mut open = VecDeque::from([from]);
    while let Some(pos) = open.pop_front() {
        for next in pos.neighbors4() {
            let Some(index) = grid.index(next) else { continue };
            if seen[index] || !grid.get(next).is_open() {
                continue;
            }
            seen[index] = true;
            open.push_back(next);
        }
    }
    seen
}

/// Carve until every open cell is reachable from `start`. Returns the number
/// of wall cells opened; a second call on the result always returns 0.
pub(super) fn repair_connectivity(grid: &mut MazeGrid, start: Pos) -> usize {
    let mut carved = 0;
    loop {
        let reachable = reachable_from(grid, start);
        let orphan = grid
            .positions()
            .find(|pos| grid.get(*pos).is_open() && grid.index(*pos).is_some_and(|i| !reachable[i]));
        let Some(orphan) = orphan else {
            break;
        };

        let island = reachable_from(grid, orphan);
        let bridge = shortest_bridge(grid, &island, &reachable, false)
            .or_else(|| shortest_bridge(grid, &island, &reachable, true));
        let Some(bridge) = bridge else {
            break;
        };
        for pos in bridge {
            if grid.get(pos) == Cell::Wall {
                grid.set(pos, Cell::Path);
                carved += 1;
            }
        }
    }
    if carved > 0 {
        debug!(target: "maze_core::mapgen", "repair opened {carved} wall cells");
    }
    carved
}

/// Multi-source BFS from every island cell to the nearest reachable cell.
/// Wall cells on the border are only crossed when `through_border` is set.
fn shortest_bridge(
    grid: &MazeGrid,
    island: &[bool],
    reachable: &[bool],
    through_border: bool,
) -> Option<Vec<Pos>> {
    let mut parent: Vec<Option<Pos>> = vec![None; island.len()];
    let mut seen = island.to_vec();
    let mut open: VecDeque<Pos> =
        grid.positions().filter(|pos| grid.index(*pos).is_some_and(|i| island[i])).collect();

    while let Some(pos) = open.pop_front() {
        for next in pos.neighbors4() {
            let Some(index) = grid.index(next) else { continue };
            if seen[index] {
                continue;
            }
            let cell = grid.get(next);
            if cell == Cell::Wall && !through_border && !grid.is_interior(next) {
                continue;
            }
            seen[index] = true;
            parent[index] = Some(pos);
            if reachable[index] {
                let mut bridge = Vec::new();
                let mut step = Some(pos);
                while let Some(current) = step {
                    let current_index = grid.index(current)?;
                    if island[current_index] {
                        break;
                    }
                    bridge.push(current);
                    step = parent[current_index];
                }
                return Some(bridge);
            }
            open.push_back(next);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_cells_connected(grid: &MazeGrid, start: Pos) -> bool {
        let reachable = reachable_from(grid, start);
        grid.positions()
            .filter(|pos| grid.get(*pos).is_open())
            .all(|pos| grid.index(pos).is_some_and(|i| reachable[i]))
    }

    #[test]
    fn isolated_pocket_is_joined_with_a_shortest_bridge() {
        let mut grid = MazeGrid::new(9, 5).expect("valid size");
        let start = Pos::new(1, 1);
        grid.set(start, Cell::Start);
        grid.set(Pos::new(2, 1), Cell::Path);
        grid.set(Pos::new(6, 1), Cell::Exit);

        let carved = repair_connectivity(&mut grid, start);

        assert_eq!(carved, 3);
        assert!(open_cells_connected(&grid, start));
        for x in 3..6 {
            assert_eq!(grid.get(Pos::new(x, 1)), Cell::Path);
        }
    }

    #[test]
    fn repair_is_idempotent() {
        let mut grid = MazeGrid::new(11, 9).expect("valid size");
        let start = Pos::new(1, 1);
        grid.set(start, Cell::Start);
        grid.set(Pos::new(5, 5), Cell::Path);
        grid.set(Pos::new(9, 7), Cell::Exit);

        assert!(repair_connectivity(&mut grid, start) > 0);
        let repaired = grid.clone();
        assert_eq!(repair_connectivity(&mut grid, start), 0);
        assert_eq!(grid, repaired);
    }

    #[test]
    fn border_cells_are_only_crossed_when_nothing_else_works() {
        let mut grid = MazeGrid::new(3, 3).expect("valid size");
        let start = Pos::new(1, 1);
        grid.set(start, Cell::Start);
        grid.set(Pos::new(0, 0), Cell::Path);

        repair_connectivity(&mut grid, start);

        assert!(open_cells_connected(&grid, start));
        let opened = grid.count(Cell::is_open);
        assert_eq!(opened, 3, "one border cell links the corner pocket");
    }
}
