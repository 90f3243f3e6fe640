//! Room placement onto a carved grid and corridor connectors.

use log::debug;

use crate::catalog::RoomType;
use crate::describe::DescriptionSession;
use crate::params::MIN_ROOM_SIZE;
use crate::rng::RandomSource;
use crate::types::{Cell, Pos};

use super::grid::{MazeGrid, manhattan};
use super::model::{RoomInstance, RoomRect};

pub(super) const PLACEMENT_ATTEMPTS: usize = 100;

/// What a room footprint may cover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum FootprintRule {
    /// Carved maze: walls and paths, touching at least one path cell.
    OverPaths,
    /// Corridor layout: untouched wall only.
    WallOnly,
}

impl FootprintRule {
    fn fits(self, grid: &MazeGrid, rect: RoomRect) -> bool {
        if rect.right() >= grid.width() - 1 || rect.bottom() >= grid.height() - 1 {
            return false;
        }
        match self {
            FootprintRule::OverPaths => {
                let mut touches_path = false;
                for pos in rect.cells() {
                    match grid.get(pos) {
                        Cell::Path => touches_path = true,
                        Cell::Wall => {}
                        _ => return false,
                    }
                }
                touches_path
            }
            FootprintRule::WallOnly => rect.cells().all(|pos| grid.get(pos) == Cell::Wall),
        }
    }
}

pub(super) struct PlacementContext<'a> {
    pub(super) grid: &'a mut MazeGrid,
    pub(super) rng: &'a mut RandomSource,
    pub(super) session: &'a mut DescriptionSession,
    pub(super) max_room_size: usize,
    pub(super) rule: FootprintRule,
}

/// Try each requested type in turn; a type that exhausts its attempts is skipped.
pub(super) fn place_rooms(
    context: &mut PlacementContext<'_>,
    room_types: &[RoomType],
) -> Vec<RoomInstance> {
    let mut rooms = Vec::new();
    for &room_type in room_types {
        match find_footprint(context) {
            Some(footprint) => {
                for pos in footprint.cells() {
                    context.grid.set(pos, Cell::Room(room_type));
                }
                let description = context.session.compose(room_type);
                debug!(target: "maze_core::mapgen", "placed {room_type} at {footprint:?}");
                rooms.push(RoomInstance { room_type, footprint, description });
            }
            None => {
                debug!(
                    target: "maze_core::mapgen",
                    "skipped {room_type} after {PLACEMENT_ATTEMPTS} attempts"
                );
            }
        }
    }
    rooms
}

fn find_footprint(context: &mut PlacementContext<'_>) -> Option<RoomRect> {
    let max_x = context.grid.width() - 2;
    let max_y = context.grid.height() - 2;
    for _ in 0..PLACEMENT_ATTEMPTS {
        let width = context.rng.range_inclusive(MIN_ROOM_SIZE, context.max_room_size);
        let height = context.rng.range_inclusive(MIN_ROOM_SIZE, context.max_room_size);
        let x = context.rng.range_inclusive(1, max_x);
        let y = context.rng.range_inclusive(1, max_y);
        let candidate = RoomRect { x, y, width, height };
        if context.rule.fits(context.grid, candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Join each room's centre to the nearest corridor cell with an L-shaped run:
/// along the centre's row first, then down the corridor cell's column. Only
/// wall cells are carved.
pub(super) fn connect_rooms_to_corridor(
    grid: &mut MazeGrid,
    rooms: &[RoomInstance],
    corridor: &[Pos],
) -> usize {
    let mut carved = 0;
    for room in rooms {
        let center = room.footprint.center();
        let Some(nearest) = nearest_corridor_cell(corridor, center) else {
            continue;
        };
        let row = (center.x.min(nearest.x)..=center.x.max(nearest.x))
            .map(|x| Pos { y: center.y, x });
        let column = (center.y.min(nearest.y)..=center.y.max(nearest.y))
            .map(|y| Pos { y, x: nearest.x });
        for pos in row.chain(column) {
            if grid.get(pos) == Cell::Wall {
                grid.set(pos, Cell::Path);
                carved += 1;
            }
        }
    }
    carved
}

/// Closest by Manhattan distance; the earliest corridor cell wins ties.
fn nearest_corridor_cell(corridor: &[Pos], target: Pos) -> Option<Pos> {
    let mut best: Option<(u32, Pos)> = None;
    for &pos in corridor {
        let distance = manhattan(pos, target);
        if best.is_none_or(|(best_distance, _)| distance < best_distance) {
            best = Some((distance, pos));
        }
    }
    best.map(|(_, pos)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> DescriptionSession {
        DescriptionSession::new(1).expect("builtin catalog")
    }

    #[test]
    fn over_paths_rule_needs_a_path_cell_and_no_markers() {
        let mut grid = MazeGrid::new(8, 8).expect("valid size");
        let rect = RoomRect { x: 2, y: 2, width: 2, height: 2 };
        assert!(!FootprintRule::OverPaths.fits(&grid, rect), "all-wall footprint is detached");

        grid.set(Pos::new(3, 3), Cell::Path);
        assert!(FootprintRule::OverPaths.fits(&grid, rect));

        grid.set(Pos::new(2, 2), Cell::Start);
        assert!(!FootprintRule::OverPaths.fits(&grid, rect));
    }

    #[test]
    fn wall_only_rule_rejects_any_open_cell() {
        let mut grid = MazeGrid::new(8, 8).expect("valid size");
        let rect = RoomRect { x: 2, y: 2, width: 3, height: 2 };
        assert!(FootprintRule::WallOnly.fits(&grid, rect));
        grid.set(Pos::new(4, 3), Cell::Path);
        assert!(!FootprintRule::WallOnly.fits(&grid, rect));
    }

    #[test]
    fn footprints_touching_the_border_are_rejected() {
        let grid = MazeGrid::new(6, 6).expect("valid size");
        let reaching = RoomRect { x: 4, y: 1, width: 2, height: 2 };
        let inside = RoomRect { x: 3, y: 3, width: 2, height: 2 };
        assert!(!FootprintRule::WallOnly.fits(&grid, reaching));
        assert!(FootprintRule::WallOnly.fits(&grid, inside));
    }

    #[test]
    fn placed_rooms_never_overlap() {
        let mut grid = MazeGrid::new(20, 20).expect("valid size");
        let mut rng = RandomSource::new(8);
        let mut session = session();
        let types = [RoomType::Armory; 6];
        let rooms = place_rooms(
            &mut PlacementContext {
                grid: &mut grid,
                rng: &mut rng,
                session: &mut session,
                max_room_size: 4,
                rule: FootprintRule::WallOnly,
            },
            &types,
        );

        assert!(!rooms.is_empty());
        assert_eq!(session.composed(), rooms.len());
        for (index, left) in rooms.iter().enumerate() {
            for right in &rooms[index + 1..] {
                assert!(!left.footprint.intersects(&right.footprint));
            }
            assert!(left.footprint.cells().all(|pos| grid.get(pos) == Cell::Room(RoomType::Armory)));
        }
    }

    #[test]
    fn room_too_large_for_grid_is_skipped() {
        let mut grid = MazeGrid::new(3, 3).expect("valid size");
        let mut rng = RandomSource::new(2);
        let mut session = session();
        let rooms = place_rooms(
            &mut PlacementContext {
                grid: &mut grid,
                rng: &mut rng,
                session: &mut session,
                max_room_size: 2,
                rule: FootprintRule::WallOnly,
            },
            &[RoomType::Library],
        );
        assert!(rooms.is_empty());
        assert_eq!(session.composed(), 0);
    }

    #[test]
    fn connectors_reach_the_nearest_corridor_cell_without_erasing_rooms() {
        let mut grid = MazeGrid::new(12, 10).expect("valid size");
        let corridor: Vec<Pos> = (1..11).map(|x| Pos::new(x, 7)).collect();
        for pos in &corridor {
            grid.set(*pos, Cell::Path);
        }
        let footprint = RoomRect { x: 4, y: 1, width: 3, height: 3 };
        for pos in footprint.cells() {
            grid.set(pos, Cell::Room(RoomType::Library));
        }
        let room = RoomInstance {
            room_type: RoomType::Library,
            footprint,
            description: String::new(),
        };

        let carved = connect_rooms_to_corridor(&mut grid, &[room], &corridor);

        // Centre (5, 2) drops straight down to (5, 7); (5, 3) stays part of the room.
        assert_eq!(carved, 3);
        for y in 4..7 {
            assert_eq!(grid.get(Pos::new(5, y)), Cell::Path);
        }
        assert_eq!(grid.get(Pos::new(5, 3)), Cell::Room(RoomType::Library));
    }

    #[test]
    fn nearest_corridor_cell_prefers_earliest_on_ties() {
        let corridor = [Pos::new(1, 5), Pos::new(5, 1), Pos::new(3, 3)];
        assert_eq!(nearest_corridor_cell(&corridor, Pos::new(3, 3)), Some(Pos::new(3, 3)));
        assert_eq!(nearest_corridor_cell(&corridor, Pos::new(1, 1)), Some(Pos::new(1, 5)));
        assert_eq!(nearest_corridor_cell(&[], Pos::new(1, 1)), None);
    }
}
