//! Procedural maze generation split into coherent submodules.

pub mod model;

mod carve;
mod generator;
mod grid;
mod layout;
mod repair;
mod selection;

pub use generator::MazeGenerator;
pub use grid::MazeGrid;
pub use model::{Maze, PlacementReport, RoomDescriptions, RoomInstance, RoomRect};

use crate::error::ConfigError;
use crate::params::MazeRequest;

/// Attempts spent on each requested room before it is skipped.
pub const PLACEMENT_ATTEMPTS: usize = layout::PLACEMENT_ATTEMPTS;

/// Resolve the request's seed (drawing one if absent) and generate.
pub fn generate_maze(request: &MazeRequest) -> Result<Maze, ConfigError> {
    request.validate()?;
    let (params, seed) = request.resolve();
    MazeGenerator::new(params)?.with_seed_choice(seed).generate()
}
