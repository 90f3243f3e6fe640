//! Text and JSON views of a generated maze.

use clap::ValueEnum;
use maze_core::{
    Maze, MazeParams, PlacementReport, Pos, RoomDescriptions, RoomInstance, SeedChoice,
};
use serde::Serialize;
use std::fmt::Write;

use crate::{format_fingerprint, format_seed};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(maze: &Maze, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(maze)),
        OutputFormat::Json => render_json(maze),
    }
}

pub fn shortfall_warning(placement: PlacementReport) -> Option<String> {
    (!placement.is_complete()).then(|| {
        format!(
            "Warning: only {} of {} requested rooms fit in this maze.",
            placement.placed, placement.requested
        )
    })
}

/// `Seed: 42`, marked `(generated)` when no seed was supplied.
pub fn seed_line(seed: SeedChoice) -> String {
    let origin = if seed.was_generated() { " (generated)" } else { "" };
    format!("Seed: {}{origin}", format_seed(seed.value()))
}

/// A single room description followed by the seed that produced it.
pub fn render_description(description: &str, seed: SeedChoice) -> String {
    format!("{description}\n{}", seed_line(seed))
}

/// Grid, seed, shortfall warning, then descriptions grouped by colour and type.
pub fn render_text(maze: &Maze) -> String {
    let mut out = maze.to_text();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');

    let _ = writeln!(out, "{}", seed_line(maze.seed));
    let _ = writeln!(out, "Args: {}", maze.params.wire_args());
    let _ = writeln!(out, "Rooms: {} of {}", maze.placement.placed, maze.placement.requested);
    if let Some(warning) = shortfall_warning(maze.placement) {
        let _ = writeln!(out, "{warning}");
    }

    for group in maze.descriptions_by_room() {
        let _ = writeln!(out, "\n{} ({}):", group.room_type, group.color_name);
        for description in &group.descriptions {
            let _ = writeln!(out, "  - {description}");
        }
    }
    out
}

#[derive(Serialize)]
struct MazeView<'a> {
    params: &'a MazeParams,
    seed_generated: bool,
    args: String,
    fingerprint: String,
    grid: Vec<&'a str>,
    start: Pos,
    exit: Pos,
    placement: PlacementReport,
    rooms: &'a [RoomInstance],
    descriptions: Vec<RoomDescriptions>,
}

pub fn render_json(maze: &Maze) -> serde_json::Result<String> {
    let text = maze.to_text();
    let view = MazeView {
        params: &maze.params,
        seed_generated: maze.seed.was_generated(),
        args: maze.params.wire_args().to_string(),
        fingerprint: format_fingerprint(maze.fingerprint()),
        grid: text.lines().collect(),
        start: maze.start,
        exit: maze.exit,
        placement: maze.placement,
        rooms: &maze.rooms,
        descriptions: maze.descriptions_by_room(),
    };
    serde_json::to_string_pretty(&view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{MazeRequest, generate_maze};

    #[test]
    fn text_lists_every_room_under_its_group() {
        let maze = generate_maze(&MazeRequest::new(31, 21).with_room_count(6).with_seed(4))
            .expect("valid request");
        let text = render_text(&maze);

        assert!(text.starts_with(&maze.to_text()));
        assert!(text.contains("Seed: 4\n"));
        assert!(!text.contains("(generated)"));
        let bullets = text.lines().filter(|line| line.starts_with("  - ")).count();
        assert_eq!(bullets, maze.rooms.len());
        for room in &maze.rooms {
            assert!(text.contains(&format!("{} ({}):", room.room_type, room.color_name())));
        }
    }

    #[test]
    fn text_warns_only_on_shortfall() {
        let short = generate_maze(&MazeRequest::new(10, 10).with_room_count(20).with_seed(7))
            .expect("valid request");
        assert!(render_text(&short).contains("Warning: only"));

        let none = generate_maze(&MazeRequest::new(10, 10).with_room_count(0).with_seed(7))
            .expect("valid request");
        assert!(shortfall_warning(none.placement).is_none());
        assert!(!render_text(&none).contains("Warning"));
    }

    #[test]
    fn description_reports_its_seed() {
        let drawn = render_description("A dusty room.", SeedChoice::Generated(12_345));
        assert_eq!(drawn, "A dusty room.\nSeed: 12345 (generated)");
        let given = render_description("A dusty room.", SeedChoice::Provided(7));
        assert_eq!(given, "A dusty room.\nSeed: 7");
    }

    #[test]
    fn json_carries_params_grid_and_rooms() {
        let maze = generate_maze(&MazeRequest::new(15, 9).with_room_count(2).with_seed(11))
            .expect("valid request");
        let json = render_json(&maze).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["params"]["seed"], 11);
        assert_eq!(value["params"]["layout"], "maze");
        assert_eq!(value["seed_generated"], false);
        assert_eq!(value["grid"].as_array().map(Vec::len), Some(9));
        assert_eq!(value["rooms"].as_array().map(Vec::len), Some(maze.rooms.len()));
        assert_eq!(value["fingerprint"], format_fingerprint(maze.fingerprint()));
    }
}
