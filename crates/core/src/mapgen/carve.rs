//! Base topology: the spanning-tree maze carve and the winding corridor walk.

use log::debug;

use crate::rng::RandomSource;
use crate::types::{Cell, Pos};

use super::grid::MazeGrid;

pub(super) const CORRIDOR_JOG_PROBABILITY: f64 = 0.2;

/// Lattice steps in north, east, south, west order before shuffling.
const LATTICE_STEPS: [(i32, i32); 4] = [(0, -2), (2, 0), (0, 2), (-2, 0)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Endpoints {
    pub(super) start: Pos,
    pub(super) exit: Pos,
}

struct Frame {
    cell: Pos,
    steps: [(i32, i32); 4],
    next: usize,
}

impl Frame {
    fn enter(cell: Pos, rng: &mut RandomSource) -> Self {
        let mut steps = LATTICE_STEPS;
        rng.shuffle(&mut steps);
        Self { cell, steps, next: 0 }
    }
}

/// Depth-first backtracker from (1, 1) with an explicit stack.
///
/// Each frame shuffles its directions on entry and tries them in order, which
/// is exactly the visit order of the recursive formulation.
pub(super) fn carve_maze(grid: &mut MazeGrid, rng: &mut RandomSource) -> Endpoints {
    let start = Pos::new(1, 1);
    grid.set(start, Cell::Start);
    grid.set(Pos::new(1, 0), Cell::Path);

    let mut carved = 0_usize;
    let mut stack = vec![Frame::enter(start, rng)];
    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.steps.len() {
            stack.pop();
            continue;
        }
        let (dx, dy) = frame.steps[frame.next];
        frame.next += 1;

        let from = frame.cell;
        let target = Pos { y: from.y + dy, x: from.x + dx };
        if !grid.is_interior(target) || grid.get(target) != Cell::Wall {
            continue;
        }
        grid.set(Pos { y: from.y + dy / 2, x: from.x + dx / 2 }, Cell::Path);
        grid.set(target, Cell::Path);
        carved += 1;
        stack.push(Frame::enter(target, rng));
    }

    let exit = place_exit(grid, start);
    debug!(target: "maze_core::mapgen", "carved {carved} lattice cells, exit at {exit:?}");
    Endpoints { start, exit }
}

/// The exit sits on interior row `height - 3` (row 1 on three-row grids) so
/// it never lands on the entrance at the top border. When the only interior
/// cell is the start, the exit opens in the east border beside it.
fn place_exit(grid: &mut MazeGrid, start: Pos) -> Pos {
    let height = grid.height() as i32;
    let mut exit = Pos::new(grid.width() as i32 - 2, (height - 3).clamp(1, height - 2));
    if exit == start {
        let below = Pos { y: exit.y + 1, x: exit.x };
        exit = if grid.is_interior(below) { below } else { Pos { y: exit.y, x: exit.x + 1 } };
    }
    grid.set(exit, Cell::Exit);

    let approach = Pos { y: exit.y, x: exit.x - 1 };
    if grid.get(approach) == Cell::Wall {
        grid.set(approach, Cell::Path);
    }
    exit
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Corridor {
    pub(super) endpoints: Endpoints,
    /// Every cell the walk stepped on, in walk order.
    pub(super) path: Vec<Pos>,
}

/// Walk east from the middle of the left edge, jogging up or down at random.
pub(super) fn carve_corridor(grid: &mut MazeGrid, rng: &mut RandomSource) -> Corridor {
    let mut pos = Pos::new(1, (grid.height() / 2) as i32);
    let mut path = Vec::new();
    while grid.is_interior(pos) {
        grid.set(pos, Cell::Path);
        path.push(pos);
        if rng.chance(CORRIDOR_JOG_PROBABILITY) {
            let dy = if rng.below(2) == 0 { -1 } else { 1 };
            let jogged = Pos { y: pos.y + dy, x: pos.x };
            if grid.is_interior(jogged) {
                pos = jogged;
            }
        } else {
            pos.x += 1;
        }
    }

    let start = path[0];
    // A corridor that never left its first cell exits through the east wall.
    let exit = match path.last() {
        Some(last) if *last != start => *last,
        _ => Pos { y: start.y, x: start.x + 1 },
    };
    grid.set(start, Cell::Start);
    grid.set(exit, Cell::Exit);
    debug!(target: "maze_core::mapgen", "corridor walk took {} steps", path.len());
    Corridor { endpoints: Endpoints { start, exit }, path }
}
