//! Maze generation orchestration: carve, select, place, connect, repair.

use log::{info, warn};

use crate::describe::DescriptionSession;
use crate::error::ConfigError;
use crate::params::MazeParams;
use crate::rng::RandomSource;
use crate::seed::SeedChoice;
use crate::types::Layout;

use super::carve::{carve_corridor, carve_maze};
use super::grid::MazeGrid;
use super::layout::{FootprintRule, PlacementContext, connect_rooms_to_corridor, place_rooms};
use super::model::{Maze, PlacementReport};
use super::repair::repair_connectivity;
use super::selection::select_room_types;

#[derive(Clone, Debug)]
pub struct MazeGenerator {
    params: MazeParams,
    seed: SeedChoice,
}

impl MazeGenerator {
    /// Parameters are validated here so `generate` never fails halfway.
    pub fn new(params: MazeParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let seed = SeedChoice::Provided(params.seed);
        Ok(Self { params, seed })
    }

    /// Record how the seed was obtained; it does not affect the output.
    pub fn with_seed_choice(mut self, seed: SeedChoice) -> Self {
        debug_assert_eq!(seed.value(), self.params.seed);
        self.seed = seed;
        self
    }

    pub fn params(&self) -> &MazeParams {
        &self.params
    }

    pub fn generate(&self) -> Result<Maze, ConfigError> {
        let params = &self.params;
        let mut grid = MazeGrid::new(params.width, params.height)?;
        let mut session = DescriptionSession::with_policy(params.seed, params.reshuffle_policy())?;
        let mut rng = RandomSource::new(params.seed);

        let (endpoints, corridor) = match params.layout {
            Layout::Maze => (carve_maze(&mut grid, &mut rng), None),
            Layout::Corridor => {
                let corridor = carve_corridor(&mut grid, &mut rng);
                (corridor.endpoints, Some(corridor.path))
            }
        };

        let room_types = select_room_types(&params.filter, params.room_count, &mut rng);
        let rule = match params.layout {
            Layout::Maze => FootprintRule::OverPaths,
            Layout::Corridor => FootprintRule::WallOnly,
        };
        let rooms = place_rooms(
            &mut PlacementContext {
                grid: &mut grid,
                rng: &mut rng,
                session: &mut session,
                max_room_size: params.max_room_size,
                rule,
            },
            &room_types,
        );
        if let Some(corridor) = &corridor {
            connect_rooms_to_corridor(&mut grid, &rooms, corridor);
        }
        repair_connectivity(&mut grid, endpoints.start);

        let placement = PlacementReport { requested: params.room_count, placed: rooms.len() };
        if !placement.is_complete() {
            warn!(
                target: "maze_core::mapgen",
                "only {} of {} rooms placed; the maze may be too small",
                placement.placed,
                placement.requested
            );
        }
        info!(
            target: "maze_core::mapgen",
            "generated {}x{} {} (seed {}) with {} rooms",
            params.width,
            params.height,
            params.layout.as_str(),
            params.seed,
            rooms.len()
        );

        Ok(Maze {
            params: params.clone(),
            seed: self.seed,
            grid,
            start: endpoints.start,
            exit: endpoints.exit,
            rooms,
            placement,
        })
    }
}
