use serde::{Deserialize, Serialize};

use crate::catalog::RoomType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    /// Orthogonal neighbours in north, east, south, west order.
    pub fn neighbors4(self) -> [Pos; 4] {
        [
            Pos { y: self.y - 1, x: self.x },
            Pos { y: self.y, x: self.x + 1 },
            Pos { y: self.y + 1, x: self.x },
            Pos { y: self.y, x: self.x - 1 },
        ]
    }
}

/// Categorical content of one grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Path,
    Start,
    Exit,
    Room(RoomType),
}

impl Cell {
    pub fn is_open(self) -> bool {
        self != Cell::Wall
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Path => '.',
            Cell::Start => 'S',
            Cell::Exit => 'E',
            Cell::Room(room_type) => room_type.glyph(),
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            Cell::Wall => [0, 0, 0],
            Cell::Path => [225, 225, 225],
            Cell::Start => [0, 255, 0],
            Cell::Exit => [255, 0, 0],
            Cell::Room(room_type) => room_type.rgb(),
        }
    }

    pub(crate) fn code(self) -> u8 {
        match self {
            Cell::Wall => 0,
            Cell::Path => 1,
            Cell::Start => 2,
            Cell::Exit => 3,
            Cell::Room(room_type) => 16 + room_type.index() as u8,
        }
    }
}

/// Which carving strategy builds the base grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Maze,
    Corridor,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Maze => "maze",
            Layout::Corridor => "corridor",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "maze" | "default" => Some(Layout::Maze),
            "corridor" => Some(Layout::Corridor),
            _ => None,
        }
    }
}
