//! `forgeon`: generate, describe and keep procedural mazes.
use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use env_logger::Env;
use forgeon::cli::{GenerationFlags, generate};
use forgeon::config::AppConfig;
use forgeon::render::{OutputFormat, render, render_description};
use forgeon::saved_mazes::SavedMazeStore;
use forgeon::{format_fingerprint, format_seed};
use log::info;
use maze_core::{DescriptionSession, MazeGenerator, MazeRequest, RandomSource, resolve_seed};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file; defaults to forgeon.toml in the platform config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a maze and print it
    Generate {
        #[command(flatten)]
        flags: GenerationFlags,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Generate a maze with random size, rooms and filter
    Randomize {
        /// Seed for choosing the parameters
        #[arg(long)]
        seed: Option<u32>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print one description for a room type
    Describe {
        room_type: String,
        #[arg(long)]
        seed: Option<u32>,
    },
    /// Generate a maze and store its parameters
    Save {
        #[arg(long)]
        name: String,
        #[command(flatten)]
        flags: GenerationFlags,
    },
    /// List saved mazes
    List,
    /// Regenerate and print a saved maze
    Show {
        id: u32,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Delete a saved maze; later ids move down by one
    Delete { id: u32 },
}

fn store_path(config: &AppConfig) -> Result<PathBuf> {
    config.store.store_path().ok_or_else(|| eyre!("no data directory for the saved-maze store"))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = AppConfig::resolve(cli.config.as_deref()).wrap_err("failed to read config")?;
    let owner = config.store.owner.as_str();

    match cli.command {
        Commands::Generate { flags, format } => {
            let request = flags.apply(config.request())?;
            let maze = generate(&request)?;
            println!("{}", render(&maze, format)?);
        }
        Commands::Randomize { seed, format } => {
            let choice = resolve_seed(seed);
            let mut rng = RandomSource::new(choice.value());
            let request = MazeRequest::randomized(&mut rng)
                .with_low_water_mark(config.text.low_water_mark);
            info!("randomized from seed {}: {}", choice.value(), request_summary(&request));
            let maze = generate(&request)?;
            println!("{}", render(&maze, format)?);
        }
        Commands::Describe { room_type, seed } => {
            let seed = resolve_seed(seed);
            let mut session =
                DescriptionSession::with_policy(seed.value(), config.text.reshuffle_policy())?;
            println!("{}", render_description(&session.compose_named(&room_type), seed));
        }
        Commands::Save { name, flags } => {
            let path = store_path(&config)?;
            let request = flags.apply(config.request())?;
            let maze = generate(&request)?;
            let mut store = SavedMazeStore::load_or_default(&path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?;
            let id = store.save(owner, &name, maze.params.clone());
            store
                .write_atomic(&path)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            println!(
                "Saved '{name}' as #{id} (seed {}, fingerprint {})",
                format_seed(maze.params.seed),
                format_fingerprint(maze.fingerprint())
            );
        }
        Commands::List => {
            let path = store_path(&config)?;
            let store = SavedMazeStore::load_or_default(&path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?;
            for entry in store.list(owner) {
                let summary = request_summary(&entry.params.request());
                println!("{:>4}  {:<24} {summary}", entry.id, entry.name);
            }
        }
        Commands::Show { id, format } => {
            let path = store_path(&config)?;
            let store = SavedMazeStore::load_or_default(&path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?;
            let entry =
                store.get(owner, id).ok_or_else(|| eyre!("no saved maze #{id} for {owner}"))?;
            let maze = MazeGenerator::new(entry.params.clone())?.generate()?;
            println!("{}", render(&maze, format)?);
        }
        Commands::Delete { id } => {
            let path = store_path(&config)?;
            let mut store = SavedMazeStore::load_or_default(&path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?;
            let removed =
                store.delete(owner, id).ok_or_else(|| eyre!("no saved maze #{id} for {owner}"))?;
            store
                .write_atomic(&path)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            println!("Deleted '{}'", removed.name);
        }
    }
    Ok(())
}

fn request_summary(request: &MazeRequest) -> String {
    let seed = request.seed.map_or_else(|| "random".to_owned(), format_seed);
    format!("{}x{} seed={seed} {}", request.width, request.height, request.wire_args())
}
