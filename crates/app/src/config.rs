//! The optional `forgeon.toml` configuration file.
//!
//! ```toml
//! [defaults]
//! width = 41
//! room_types = ["Library", "Alchemy Lab"]
//! layout = "corridor"
//!
//! [text]
//! low_water_mark = 3
//!
//! [store]
//! owner = "ada"
//! ```
//!
//! Every table and key is optional. A missing file is the same as an empty one.

use directories::ProjectDirs;
use log::debug;
use maze_core::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ROOM_SIZE, DEFAULT_ROOM_COUNT, DEFAULT_WIDTH, Layout, MazeRequest,
    ReshufflePolicy, RoomFilter, RoomType,
};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;
use crate::saved_mazes::SavedMazeStore;

pub const DEFAULT_OWNER: &str = "local";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub defaults: GenerationDefaults,
    pub text: TextConfig,
    pub store: StoreConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationDefaults {
    pub width: usize,
    pub height: usize,
    pub room_count: usize,
    pub max_room_size: usize,
    /// Catalog names. Empty means every room type.
    pub room_types: Vec<RoomType>,
    pub layout: Layout,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            room_count: DEFAULT_ROOM_COUNT,
            max_room_size: DEFAULT_MAX_ROOM_SIZE,
            room_types: Vec::new(),
            layout: Layout::Maze,
        }
    }
}

impl GenerationDefaults {
    pub fn filter(&self) -> RoomFilter {
        if self.room_types.is_empty() {
            RoomFilter::all()
        } else {
            self.room_types.iter().copied().collect()
        }
    }

    /// The unseeded request these defaults describe.
    pub fn request(&self) -> MazeRequest {
        MazeRequest::new(self.width, self.height)
            .with_room_count(self.room_count)
            .with_max_room_size(self.max_room_size)
            .with_filter(self.filter())
            .with_layout(self.layout)
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    /// Reshuffle a word bag once fewer than this many words remain. 0 disables it.
    pub low_water_mark: usize,
}

impl TextConfig {
    pub fn reshuffle_policy(self) -> ReshufflePolicy {
        ReshufflePolicy::from_low_water_mark(self.low_water_mark)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub path: Option<PathBuf>,
    pub owner: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { path: None, owner: DEFAULT_OWNER.to_owned() }
    }
}

impl StoreConfig {
    /// The configured store file, else the platform data directory.
    pub fn store_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(SavedMazeStore::get_default_path)
    }
}

impl AppConfig {
    /// The unseeded request for new mazes. Saved mazes keep the low-water
    /// mark they were generated with.
    pub fn request(&self) -> MazeRequest {
        self.defaults.request().with_low_water_mark(self.text.low_water_mark)
    }

    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.config_dir().to_path_buf();
            path.push("forgeon.toml");
            path
        })
    }

    pub fn parse(content: &str) -> io::Result<Self> {
        toml::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Loads `path`, falling back to built-in defaults when the file does not exist.
    pub fn load(path: &Path) -> io::Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Loads the explicit path when given, else the platform default location.
    pub fn resolve(explicit: Option<&Path>) -> io::Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(Self::get_default_path) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}
