use anyhow::{Context, Result};
use clap::Parser;
use maze_core::{MazeGenerator, MazeParams};
use std::fs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the saved maze parameters JSON file to replay
    #[arg(short, long)]
    params: String,

    /// Also print the glyph grid
    #[arg(long)]
    show: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let params_data = fs::read_to_string(&args.params)
        .with_context(|| format!("Failed to read params file: {}", args.params))?;
    let params: MazeParams = serde_json::from_str(&params_data)
        .with_context(|| "Failed to deserialize maze params JSON")?;

    let maze = MazeGenerator::new(params)
        .context("Saved params are not a valid maze configuration")?
        .generate()
        .context("Maze generation failed")?;

    println!("Replay complete.");
    println!("Size: {}x{}", maze.width(), maze.height());
    println!("Seed: {}", maze.params.seed);
    println!("Low-water mark: {}", maze.params.low_water_mark);
    println!("Rooms: {} of {}", maze.placement.placed, maze.placement.requested);
    println!("Fingerprint: 0x{:016x}", maze.fingerprint());
    if args.show {
        println!("{}", maze.to_text());
    }

    Ok(())
}
