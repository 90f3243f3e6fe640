//! Generation flags shared by the `generate` and `save` subcommands.

use clap::Args;
use log::info;
use maze_core::{
    ConfigError, Layout, Maze, MazeGenerator, MazeRequest, ParamsError, RoomFilter, RoomType,
    WireArgs,
};

fn parse_room_type(name: &str) -> Result<RoomType, String> {
    RoomType::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = RoomType::ALL.iter().map(|room_type| room_type.name()).collect();
        format!("unknown room type '{name}' (expected one of: {})", known.join(", "))
    })
}

fn parse_layout(name: &str) -> Result<Layout, String> {
    Layout::from_name(name).ok_or_else(|| format!("unknown layout '{name}'"))
}

/// Flags override `--args`, which overrides the configuration file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationFlags {
    #[arg(long)]
    pub width: Option<usize>,
    #[arg(long)]
    pub height: Option<usize>,
    /// Fixed seed; omitted means a fresh one is drawn and reported
    #[arg(long)]
    pub seed: Option<u32>,
    /// Number of rooms to place
    #[arg(long)]
    pub rooms: Option<usize>,
    #[arg(long)]
    pub max_room_size: Option<usize>,
    /// Room type bitmask, bit i selecting the i-th catalog entry
    #[arg(long, conflicts_with = "room_type")]
    pub filter: Option<u32>,
    /// Allowed room type by name (repeatable)
    #[arg(long = "room-type", value_parser = parse_room_type)]
    pub room_type: Vec<RoomType>,
    /// "maze" or "corridor"
    #[arg(long, value_parser = parse_layout)]
    pub layout: Option<Layout>,
    /// Compact argument string, e.g. "rf=341;rnum=5;mrsize=3;template=corridor"
    #[arg(long)]
    pub args: Option<String>,
}

impl GenerationFlags {
    pub fn apply(&self, base: MazeRequest) -> Result<MazeRequest, ParamsError> {
        let mut request = match &self.args {
            Some(text) => base.with_wire_args(&text.parse::<WireArgs>()?),
            None => base,
        };
        if let Some(width) = self.width {
            request.width = width;
        }
        if let Some(height) = self.height {
            request.height = height;
        }
        if self.seed.is_some() {
            request.seed = self.seed;
        }
        if let Some(rooms) = self.rooms {
            request.room_count = rooms;
        }
        if let Some(max_room_size) = self.max_room_size {
            request.max_room_size = max_room_size;
        }
        if let Some(bits) = self.filter {
            request.filter = RoomFilter::from_bits(bits);
        }
        if !self.room_type.is_empty() {
            request.filter = self.room_type.iter().copied().collect();
        }
        if let Some(layout) = self.layout {
            request.layout = layout;
        }
        Ok(request)
    }
}

/// Validates, resolves the seed and generates.
pub fn generate(request: &MazeRequest) -> Result<Maze, ConfigError> {
    request.validate()?;
    let (params, seed) = request.resolve();
    if seed.was_generated() {
        info!("no seed given, drew {}", seed.value());
    }
    MazeGenerator::new(params)?.with_seed_choice(seed).generate()
}
