use std::collections::{BTreeSet, VecDeque};

use anyhow::{Result, bail};
use clap::Parser;
use log::debug;
use maze_core::{
    Cell, Layout, MAX_DIMENSION, MIN_DIMENSION, Maze, MazeGenerator, MazeParams, RoomFilter,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    cases: u32,
    /// Largest width or height to try
    #[arg(long, default_value_t = 80)]
    max_dimension: usize,
}

fn pick(rng: &mut ChaCha8Rng, low: usize, high: usize) -> usize {
    low + (rng.next_u64() as usize % (high - low + 1))
}

fn random_params(rng: &mut ChaCha8Rng, max_dimension: usize) -> MazeParams {
    let width = pick(rng, 3, max_dimension);
    let height = pick(rng, 3, max_dimension);
    MazeParams {
        width,
        height,
        seed: rng.next_u64() as u32,
        room_count: pick(rng, 0, 25),
        max_room_size: pick(rng, 2, 10),
        filter: RoomFilter::from_bits(rng.next_u64() as u32),
        layout: if rng.next_u64() & 1 == 0 { Layout::Maze } else { Layout::Corridor },
        low_water_mark: pick(rng, 0, 4),
    }
}

fn unreachable_open_cells(maze: &Maze) -> usize {
    let mut open = VecDeque::from([maze.start]);
    let mut seen = BTreeSet::from([maze.start]);
    while let Some(pos) = open.pop_front() {
        for next in pos.neighbors4() {
            if seen.contains(&next) || !maze.cell(next).is_open() {
                continue;
            }
            seen.insert(next);
            open.push_back(next);
        }
    }
    maze.grid.count(Cell::is_open) - seen.len()
}

fn check(maze: &Maze) -> Result<()> {
    let orphans = unreachable_open_cells(maze);
    if orphans > 0 {
        bail!("{orphans} open cells unreachable from start");
    }
    if maze.cell(maze.start) != Cell::Start || maze.cell(maze.exit) != Cell::Exit {
        bail!("start or exit marker overwritten");
    }
    for (index, room) in maze.rooms.iter().enumerate() {
        if room.footprint.right() >= maze.width() || room.footprint.bottom() >= maze.height() {
            bail!("room {index} leaves the grid: {:?}", room.footprint);
        }
        if !maze.params.filter.contains(room.room_type) {
            bail!("room {index} has filtered-out type {}", room.room_type);
        }
        if room.description.is_empty() {
            bail!("room {index} has an empty description");
        }
        if maze.rooms[index + 1..].iter().any(|other| other.footprint.intersects(&room.footprint)) {
            bail!("room {index} overlaps a later room");
        }
    }
    if maze.placement.placed != maze.rooms.len() || maze.rooms.len() > maze.params.room_count {
        bail!("placement report disagrees with placed rooms");
    }
    let again = MazeGenerator::new(maze.params.clone())?.generate()?;
    if again.fingerprint() != maze.fingerprint() {
        bail!("regeneration produced a different maze");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} cases...", args.seed, args.cases);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut rooms_placed = 0_usize;
    let mut shortfalls = 0_usize;

    for case in 0..args.cases {
        let params = random_params(&mut rng, args.max_dimension.clamp(MIN_DIMENSION, MAX_DIMENSION));
        let maze = MazeGenerator::new(params.clone())?.generate()?;
        debug!("case {case}: {}x{} placed {}", params.width, params.height, maze.rooms.len());
        if let Err(error) = check(&maze) {
            bail!("case {case} failed for {params:?}: {error}");
        }
        rooms_placed += maze.rooms.len();
        shortfalls += usize::from(!maze.placement.is_complete());
    }

    println!(
        "Fuzz complete: {} mazes, {} rooms placed, {} with a placement shortfall.",
        args.cases, rooms_placed, shortfalls
    );
    Ok(())
}
