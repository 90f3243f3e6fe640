pub mod catalog;
pub mod describe;
pub mod error;
pub mod mapgen;
pub mod params;
pub mod rng;
pub mod seed;
pub mod types;

pub use catalog::{RoomFilter, RoomType, RoomWords, WordCategory};
pub use describe::{
    DescriptionSession, FALLBACK_DESCRIPTION, ReshufflePolicy, ShuffleBag, describe_room,
    normalize_sentence,
};
pub use error::ConfigError;
pub use mapgen::{
    Maze, MazeGenerator, MazeGrid, PlacementReport, RoomDescriptions, RoomInstance, RoomRect,
    generate_maze,
};
pub use params::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ROOM_SIZE, DEFAULT_ROOM_COUNT, DEFAULT_WIDTH, MAX_DIMENSION,
    MIN_DIMENSION, MazeParams, MazeRequest, ParamsError, WireArgs,
};
pub use rng::RandomSource;
pub use seed::{SeedChoice, generate_runtime_seed, resolve_seed};
pub use types::*;
