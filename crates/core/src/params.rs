//! Generation parameters: the caller's request, the replayable record, and
//! the compact `rf=..;rnum=..;mrsize=..` argument string used by links.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{RoomFilter, RoomType};
use crate::describe::ReshufflePolicy;
use crate::error::ConfigError;
use crate::rng::RandomSource;
use crate::seed::{SeedChoice, resolve_seed};
use crate::types::Layout;

pub const MIN_DIMENSION: usize = 3;
pub const MAX_DIMENSION: usize = 200;
pub const MIN_ROOM_SIZE: usize = 2;

pub const DEFAULT_WIDTH: usize = 30;
pub const DEFAULT_HEIGHT: usize = 30;
pub const DEFAULT_ROOM_COUNT: usize = 8;
pub const DEFAULT_MAX_ROOM_SIZE: usize = 8;

const RANDOM_DIMENSION_MIN: usize = 10;
const RANDOM_DIMENSION_MAX: usize = 150;

fn validate(width: usize, height: usize, max_room_size: usize) -> Result<(), ConfigError> {
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(ConfigError::GridTooSmall { width, height, minimum: MIN_DIMENSION });
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(ConfigError::GridTooLarge { width, height, maximum: MAX_DIMENSION });
    }
    if max_room_size < MIN_ROOM_SIZE {
        return Err(ConfigError::RoomSizeTooSmall { max_room_size, minimum: MIN_ROOM_SIZE });
    }
    Ok(())
}

/// What a caller asks for. A missing seed is drawn at generation time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeRequest {
    pub width: usize,
    pub height: usize,
    pub seed: Option<u32>,
    pub room_count: usize,
    pub max_room_size: usize,
    pub filter: RoomFilter,
    pub layout: Layout,
    /// Word-bag reshuffle threshold; 0 reshuffles only on exhaustion.
    #[serde(default)]
    pub low_water_mark: usize,
}

impl Default for MazeRequest {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl MazeRequest {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed: None,
            room_count: DEFAULT_ROOM_COUNT,
            max_room_size: DEFAULT_MAX_ROOM_SIZE,
            filter: RoomFilter::all(),
            layout: Layout::Maze,
            low_water_mark: 0,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_room_count(mut self, room_count: usize) -> Self {
        self.room_count = room_count;
        self
    }

    pub fn with_max_room_size(mut self, max_room_size: usize) -> Self {
        self.max_room_size = max_room_size;
        self
    }

    pub fn with_filter(mut self, filter: RoomFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_low_water_mark(mut self, low_water_mark: usize) -> Self {
        self.low_water_mark = low_water_mark;
        self
    }

    /// Overwrite the fields an argument string carries.
    pub fn with_wire_args(mut self, args: &WireArgs) -> Self {
        self.filter = args.filter.clone();
        self.room_count = args.room_count;
        self.max_room_size = args.max_room_size;
        self.layout = args.layout;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate(self.width, self.height, self.max_room_size)
    }

    /// Fix the seed, drawing a fresh one when the request has none.
    pub fn resolve(&self) -> (MazeParams, SeedChoice) {
        let seed = resolve_seed(self.seed);
        let params = MazeParams {
            width: self.width,
            height: self.height,
            seed: seed.value(),
            room_count: self.room_count,
            max_room_size: self.max_room_size,
            filter: self.filter.clone(),
            layout: self.layout,
            low_water_mark: self.low_water_mark,
        };
        (params, seed)
    }

    pub fn wire_args(&self) -> WireArgs {
        WireArgs {
            filter: self.filter.clone(),
            room_count: self.room_count,
            max_room_size: self.max_room_size,
            layout: self.layout,
        }
    }

    /// A random but always valid request, drawn from `rng`.
    ///
    /// Room size scales with the shorter side and room count with the area,
    /// so large grids get more and bigger rooms.
    pub fn randomized(rng: &mut RandomSource) -> Self {
        let width = rng.range_inclusive(RANDOM_DIMENSION_MIN, RANDOM_DIMENSION_MAX);
        let height = rng.range_inclusive(RANDOM_DIMENSION_MIN, RANDOM_DIMENSION_MAX);
        let seed = rng.next_u64() as u32;
        let filter = RoomFilter::from_bits(rng.below(1 << RoomType::ALL.len()) as u32);

        let shorter = width.min(height) as f64;
        let size_low = ((shorter / 4.0).sqrt().round() as usize).max(MIN_ROOM_SIZE);
        let size_high = ((shorter * 4.0).sqrt().round() as usize).max(size_low);
        let max_room_size = rng.range_inclusive(size_low, size_high);

        let count_low = (((width + height) as f64 / 4.0).sqrt().round()) as usize;
        let count_high = (((width * height) as f64 / (2 * max_room_size) as f64).sqrt().round()
            as usize)
            .max(count_low);
        let room_count = rng.range_inclusive(count_low, count_high);

        Self {
            width,
            height,
            seed: Some(seed),
            room_count,
            max_room_size,
            filter,
            layout: Layout::Maze,
            low_water_mark: 0,
        }
    }
}

/// Everything needed to rebuild a maze exactly. This is what gets saved.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MazeParams {
    pub width: usize,
    pub height: usize,
    pub seed: u32,
    pub room_count: usize,
    pub max_room_size: usize,
    pub filter: RoomFilter,
    #[serde(default)]
    pub layout: Layout,
    /// Word-bag reshuffle threshold. Descriptions depend on it.
    #[serde(default)]
    pub low_water_mark: usize,
}

impl MazeParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate(self.width, self.height, self.max_room_size)
    }

    pub fn request(&self) -> MazeRequest {
        MazeRequest {
            width: self.width,
            height: self.height,
            seed: Some(self.seed),
            room_count: self.room_count,
            max_room_size: self.max_room_size,
            filter: self.filter.clone(),
            layout: self.layout,
            low_water_mark: self.low_water_mark,
        }
    }

    pub fn reshuffle_policy(&self) -> ReshufflePolicy {
        ReshufflePolicy::from_low_water_mark(self.low_water_mark)
    }

    pub fn wire_args(&self) -> WireArgs {
        WireArgs {
            filter: self.filter.clone(),
            room_count: self.room_count,
            max_room_size: self.max_room_size,
            layout: self.layout,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("argument '{key}' expects an unsigned integer, got '{value}'")]
    InvalidInteger { key: &'static str, value: String },

    #[error("unknown template '{0}' (expected 'maze' or 'corridor')")]
    UnknownTemplate(String),
}

/// The `rf=<bits>;rnum=<n>;mrsize=<n>;template=<name>` argument string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireArgs {
    pub filter: RoomFilter,
    pub room_count: usize,
    pub max_room_size: usize,
    pub layout: Layout,
}

impl Default for WireArgs {
    fn default() -> Self {
        Self {
            filter: RoomFilter::all(),
            room_count: DEFAULT_ROOM_COUNT,
            max_room_size: DEFAULT_MAX_ROOM_SIZE,
            layout: Layout::Maze,
        }
    }
}

fn parse_integer<T: FromStr>(key: &'static str, value: &str) -> Result<T, ParamsError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParamsError::InvalidInteger { key, value: value.to_owned() })
}

impl FromStr for WireArgs {
    type Err = ParamsError;

    /// Unknown keys and pieces without `=` are ignored; missing keys keep their defaults.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut args = Self::default();
        for piece in text.split(';') {
            let Some((key, value)) = piece.split_once('=') else {
                continue;
            };
            match key.trim() {
                "rf" => args.filter = RoomFilter::from_bits(parse_integer("rf", value)?),
                "rnum" => args.room_count = parse_integer("rnum", value)?,
                "mrsize" => args.max_room_size = parse_integer("mrsize", value)?,
                "template" => {
                    args.layout = Layout::from_name(value.trim())
                        .ok_or_else(|| ParamsError::UnknownTemplate(value.trim().to_owned()))?;
                }
                _ => {}
            }
        }
        Ok(args)
    }
}

impl fmt::Display for WireArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rf={};rnum={};mrsize={};template={}",
            self.filter.bits(),
            self.room_count,
            self.max_room_size,
            self.layout.as_str()
        )
    }
}
