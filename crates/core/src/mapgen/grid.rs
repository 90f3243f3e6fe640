//! Rectangular cell grid shared by every carving and placement stage.

use crate::error::ConfigError;
use crate::params::{MAX_DIMENSION, MIN_DIMENSION};
use crate::types::{Cell, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl MazeGrid {
    /// An all-wall grid.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(ConfigError::GridTooSmall { width, height, minimum: MIN_DIMENSION });
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(ConfigError::GridTooLarge { width, height, maximum: MAX_DIMENSION });
        }
        Ok(Self { width, height, cells: vec![Cell::Wall; width * height] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Inside the one-cell border.
    pub fn is_interior(&self, pos: Pos) -> bool {
        pos.x >= 1
            && pos.y >= 1
            && (pos.x as usize) < self.width - 1
            && (pos.y as usize) < self.height - 1
    }

    pub(crate) fn index(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.y as usize) * self.width + (pos.x as usize))
    }

    /// Out-of-bounds positions read as wall.
    pub fn get(&self, pos: Pos) -> Cell {
        self.index(pos).map_or(Cell::Wall, |index| self.cells[index])
    }

    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        if let Some(index) = self.index(pos) {
            self.cells[index] = cell;
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let width = self.width;
        (0..self.height)
            .flat_map(move |y| (0..width).map(move |x| Pos { y: y as i32, x: x as i32 }))
    }

    pub fn count(&self, predicate: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|cell| predicate(**cell)).count()
    }

    pub fn to_text(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.glyph()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub(super) fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}
