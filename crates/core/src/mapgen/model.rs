//! Public data models for generated mazes and the rooms placed on them.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::catalog::RoomType;
use crate::params::MazeParams;
use crate::seed::SeedChoice;
use crate::types::{Cell, Layout, Pos};

use super::grid::MazeGrid;

/// Inclusive-edge rectangle in grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl RoomRect {
    pub fn right(self) -> usize {
        self.x + self.width - 1
    }

    pub fn bottom(self) -> usize {
        self.y + self.height - 1
    }

    pub fn anchor(self) -> Pos {
        Pos { y: self.y as i32, x: self.x as i32 }
    }

    pub fn center(self) -> Pos {
        Pos { y: (self.y + (self.height / 2)) as i32, x: (self.x + (self.width / 2)) as i32 }
    }

    pub fn intersects(self, other: &Self) -> bool {
        self.x <= other.right()
            && self.right() >= other.x
            && self.y <= other.bottom()
            && self.bottom() >= other.y
    }

    pub fn contains(self, pos: Pos) -> bool {
        if pos.x < 0 || pos.y < 0 {
            return false;
        }
        let px = pos.x as usize;
        let py = pos.y as usize;
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    pub fn cells(self) -> impl Iterator<Item = Pos> {
        (self.y..=self.bottom()).flat_map(move |y| {
            (self.x..=self.right()).map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }
}

/// A placed room. Never mutated after placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInstance {
    pub room_type: RoomType,
    pub footprint: RoomRect,
    pub description: String,
}

impl RoomInstance {
    pub fn anchor(&self) -> Pos {
        self.footprint.anchor()
    }

    pub fn color_name(&self) -> &'static str {
        self.room_type.color_name()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub requested: usize,
    pub placed: usize,
}

impl PlacementReport {
    pub fn shortfall(self) -> usize {
        self.requested.saturating_sub(self.placed)
    }

    pub fn is_complete(self) -> bool {
        self.shortfall() == 0
    }
}

/// All descriptions of one (colour, room type) group, in placement order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoomDescriptions {
    pub color_name: &'static str,
    pub room_type: RoomType,
    pub descriptions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    pub params: MazeParams,
    pub seed: SeedChoice,
    pub grid: MazeGrid,
    pub start: Pos,
    pub exit: Pos,
    pub rooms: Vec<RoomInstance>,
    pub placement: PlacementReport,
}

impl Maze {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn cell(&self, pos: Pos) -> Cell {
        self.grid.get(pos)
    }

    pub fn to_text(&self) -> String {
        self.grid.to_text()
    }

    /// Row-major RGB triples, one per cell.
    pub fn rgb_pixels(&self) -> Vec<[u8; 3]> {
        self.grid.cells().iter().map(|cell| cell.rgb()).collect()
    }

    pub fn descriptions_by_room(&self) -> Vec<RoomDescriptions> {
        let mut groups: Vec<RoomDescriptions> = Vec::new();
        for room in &self.rooms {
            match groups.iter_mut().find(|group| group.room_type == room.room_type) {
                Some(group) => group.descriptions.push(room.description.clone()),
                None => groups.push(RoomDescriptions {
                    color_name: room.color_name(),
                    room_type: room.room_type,
                    descriptions: vec![room.description.clone()],
                }),
            }
        }
        groups
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width() as u32).to_le_bytes());
        bytes.extend((self.height() as u32).to_le_bytes());
        bytes.extend(self.params.seed.to_le_bytes());
        bytes.push(match self.params.layout {
            Layout::Maze => 0,
            Layout::Corridor => 1,
        });
        bytes.extend(self.params.filter.bits().to_le_bytes());
        bytes.extend((self.params.max_room_size as u32).to_le_bytes());
        bytes.extend((self.params.low_water_mark as u32).to_le_bytes());

        for cell in self.grid.cells() {
            bytes.push(cell.code());
        }
        bytes.extend(self.start.y.to_le_bytes());
        bytes.extend(self.start.x.to_le_bytes());
        bytes.extend(self.exit.y.to_le_bytes());
        bytes.extend(self.exit.x.to_le_bytes());

        bytes.extend((self.placement.requested as u32).to_le_bytes());
        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            bytes.push(room.room_type.index() as u8);
            bytes.extend((room.footprint.x as u32).to_le_bytes());
            bytes.extend((room.footprint.y as u32).to_le_bytes());
            bytes.extend((room.footprint.width as u32).to_le_bytes());
            bytes.extend((room.footprint.height as u32).to_le_bytes());
            bytes.extend((room.description.len() as u32).to_le_bytes());
            bytes.extend(room.description.as_bytes());
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_are_inclusive() {
        let rect = RoomRect { x: 2, y: 3, width: 2, height: 3 };
        assert_eq!((rect.right(), rect.bottom()), (3, 5));
        assert!(rect.contains(Pos::new(3, 5)));
        assert!(!rect.contains(Pos::new(4, 5)));
        assert_eq!(rect.cells().count(), 6);
        assert_eq!(rect.center(), Pos::new(3, 4));
    }

    #[test]
    fn touching_rects_intersect_only_when_sharing_a_cell() {
        let left = RoomRect { x: 1, y: 1, width: 2, height: 2 };
        let sharing = RoomRect { x: 2, y: 2, width: 2, height: 2 };
        let adjacent = RoomRect { x: 3, y: 1, width: 2, height: 2 };
        assert!(left.intersects(&sharing));
        assert!(!left.intersects(&adjacent));
    }

    #[test]
    fn shortfall_never_underflows() {
        assert_eq!(PlacementReport { requested: 5, placed: 3 }.shortfall(), 2);
        assert!(PlacementReport { requested: 0, placed: 0 }.is_complete());
    }
}
