use forgeon::cli::{GenerationFlags, generate};
use forgeon::config::AppConfig;
use forgeon::render::{OutputFormat, render};
use forgeon::saved_mazes::SavedMazeStore;
use maze_core::{Layout, MazeGenerator, RoomType};
use std::fs;
use tempfile::tempdir;

#[test]
fn saved_maze_regenerates_identically_after_reload() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("forgeon.toml");
    let store_path = dir.path().join("store").join("mazes.json");
    fs::write(
        &config_path,
        format!(
            "[defaults]\nwidth = 25\nheight = 17\nroom_types = [\"Library\"]\n\n\
             [text]\nlow_water_mark = 2\n\n[store]\npath = {:?}\nowner = \"ada\"\n",
            store_path.display().to_string()
        ),
    )
    .unwrap();

    let config = AppConfig::resolve(Some(&config_path)).unwrap();
    assert_eq!(config.store.store_path().as_deref(), Some(store_path.as_path()));

    let flags = GenerationFlags { seed: Some(99), rooms: Some(3), ..Default::default() };
    let request = flags.apply(config.request()).unwrap();
    let maze = generate(&request).unwrap();
    assert_eq!(maze.params.low_water_mark, 2);
    assert!(maze.rooms.iter().all(|room| room.room_type == RoomType::Library));

    let mut store = SavedMazeStore::load_or_default(&store_path).unwrap();
    let id = store.save(&config.store.owner, "library run", maze.params.clone());
    store.write_atomic(&store_path).unwrap();

    let reloaded = SavedMazeStore::load(&store_path).unwrap();
    let entry = reloaded.get("ada", id).expect("saved entry");
    assert_eq!(entry.params.low_water_mark, 2);
    let again = MazeGenerator::new(entry.params.clone()).unwrap().generate().unwrap();
    assert_eq!(again.fingerprint(), maze.fingerprint());
    assert_eq!(again.rooms, maze.rooms);
    assert_eq!(
        render(&again, OutputFormat::Text).unwrap(),
        render(&maze, OutputFormat::Text).unwrap()
    );
}

#[test]
fn replay_ignores_a_later_config_change() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mazes.json");
    let early = AppConfig::parse("[text]\nlow_water_mark = 3\n").unwrap();
    let request = GenerationFlags { seed: Some(512), rooms: Some(12), ..Default::default() }
        .apply(early.request())
        .unwrap();
    let maze = generate(&request).unwrap();

    let mut store = SavedMazeStore::default();
    let id = store.save("local", "early", maze.params.clone());
    store.write_atomic(&path).unwrap();

    // The store is read back under a config that no longer sets the mark.
    let later = AppConfig::default();
    assert_eq!(later.text.low_water_mark, 0);
    let entry = SavedMazeStore::load(&path).unwrap().get("local", id).cloned().unwrap();
    let again = MazeGenerator::new(entry.params).unwrap().generate().unwrap();
    assert_eq!(again.fingerprint(), maze.fingerprint());
    assert_eq!(again.rooms, maze.rooms);
}

#[test]
fn deleting_renumbers_the_listing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mazes.json");
    let flags = GenerationFlags {
        width: Some(12),
        height: Some(12),
        layout: Some(Layout::Corridor),
        ..Default::default()
    };

    let mut store = SavedMazeStore::default();
    for (seed, name) in [(1, "one"), (2, "two"), (3, "three")] {
        let request = GenerationFlags { seed: Some(seed), ..flags.clone() }
            .apply(AppConfig::default().request())
            .unwrap();
        let maze = generate(&request).unwrap();
        store.save("local", name, maze.params);
    }
    store.write_atomic(&path).unwrap();

    let mut store = SavedMazeStore::load(&path).unwrap();
    store.delete("local", 1).expect("first entry");
    store.write_atomic(&path).unwrap();

    let store = SavedMazeStore::load(&path).unwrap();
    let listing: Vec<(u32, &str, u32)> = store
        .list("local")
        .into_iter()
        .map(|entry| (entry.id, entry.name.as_str(), entry.params.seed))
        .collect();
    assert_eq!(listing, vec![(1, "two", 2), (2, "three", 3)]);
    assert!(store.list("local").iter().all(|entry| entry.params.layout == Layout::Corridor));
}
