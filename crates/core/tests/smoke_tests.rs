use std::collections::BTreeSet;

use maze_core::describe::TemplateRotation;
use maze_core::{
    Cell, ConfigError, DescriptionSession, FALLBACK_DESCRIPTION, Layout, MazeRequest,
    RandomSource, ReshufflePolicy, RoomFilter, RoomType, ShuffleBag, describe_room, generate_maze,
};

#[test]
fn oversubscribed_small_grid_reports_a_shortfall() {
    let request = MazeRequest::new(10, 10).with_room_count(20).with_seed(7);
    let maze = generate_maze(&request).expect("shortfall is not an error");

    // An 8x8 interior holds at most sixteen 2x2 rooms.
    assert!(maze.placement.placed < 20);
    assert_eq!(maze.placement.requested, 20);
    assert_eq!(maze.placement.shortfall(), 20 - maze.rooms.len());
}

#[test]
fn empty_filter_places_nothing_but_still_carves() {
    let request =
        MazeRequest::new(21, 21).with_room_count(6).with_seed(3).with_filter(RoomFilter::none());
    let maze = generate_maze(&request).expect("empty filter is not an error");

    assert!(maze.rooms.is_empty());
    assert_eq!(maze.placement.shortfall(), 6);
    assert_eq!(maze.cell(maze.start), Cell::Start);
    assert!(maze.grid.count(|cell| cell == Cell::Path) > 0);
}

#[test]
fn configuration_errors_surface_before_generation() {
    assert!(matches!(
        generate_maze(&MazeRequest::new(2, 30)),
        Err(ConfigError::GridTooSmall { .. })
    ));
    assert!(matches!(
        generate_maze(&MazeRequest::new(30, 30).with_max_room_size(0)),
        Err(ConfigError::RoomSizeTooSmall { .. })
    ));
}

#[test]
fn text_and_colour_views_cover_every_cell() {
    let maze = generate_maze(&MazeRequest::new(17, 9).with_seed(5)).expect("valid request");
    let text = maze.to_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert!(lines.iter().all(|line| line.chars().count() == 17));
    assert_eq!(lines[1].chars().nth(1), Some('S'));
    assert_eq!(maze.rgb_pixels().len(), 17 * 9);
}

#[test]
fn corridor_layout_generates_with_rooms() {
    let request = MazeRequest::new(50, 25).with_seed(12).with_layout(Layout::Corridor);
    let maze = generate_maze(&request).expect("valid request");
    assert!(!maze.rooms.is_empty());
    assert_eq!(maze.cell(maze.exit), Cell::Exit);
    for group in maze.descriptions_by_room() {
        assert!(group.descriptions.iter().all(|text| !text.is_empty()));
    }
}

#[test]
fn article_agrees_with_every_adjective_in_every_pool() {
    for room_type in RoomType::ALL {
        let adjectives = room_type.words().adjectives;
        let templates =
            TemplateRotation::new(["A {adjective} room holds {feature}; {sound}; {action}."])
                .expect("valid template");
        let mut session =
            DescriptionSession::with_templates(1, ReshufflePolicy::OnExhaustion, templates)
                .expect("builtin catalog");

        let mut covered = BTreeSet::new();
        for _ in 0..adjectives.len() {
            let text = session.compose(room_type);
            let (article, rest) = text.split_once(' ').expect("article then adjective");
            let adjective = rest.split(" room holds ").next().expect("adjective");
            let vowel = adjective
                .chars()
                .next()
                .is_some_and(|first| "aeiouAEIOU".contains(first));
            let expected = if vowel { "An" } else { "A" };
            assert_eq!(article, expected, "{room_type}: {text}");
            covered.insert(adjective.to_owned());
        }
        let pool: BTreeSet<String> = adjectives.iter().map(|word| (*word).to_owned()).collect();
        assert_eq!(covered, pool, "{room_type} adjectives not fully covered");
    }
}

#[test]
fn shuffle_bag_window_covers_the_whole_pool() {
    let pool = RoomType::Library.words().features;
    let mut rng = RandomSource::new(31);
    let mut bag = ShuffleBag::new(pool.iter().copied(), ReshufflePolicy::LowWater(3))
        .expect("non-empty pool");
    let draws: Vec<&str> = (0..pool.len() * 5).map(|_| bag.draw(&mut rng)).collect();
    for window in draws.windows(2 * pool.len() - 1) {
        let distinct: BTreeSet<&str> = window.iter().copied().collect();
        assert_eq!(distinct.len(), pool.len());
    }
}

#[test]
fn unknown_room_type_gets_generic_text() {
    assert_eq!(describe_room("Ballroom", 1).expect("builtin catalog"), FALLBACK_DESCRIPTION);
    let known = describe_room("Magic Chamber", 1).expect("builtin catalog");
    assert!(known.ends_with('.') || known.ends_with('!') || known.ends_with('?'));
}
