//! Deduplication tests through the whole pipeline.

use mudmap_engine::Pipeline;
use mudmap_foundation::{Direction, MapGraph, ParseConfig, ParseContext, RoomKey, WarningKind};

fn map(text: &str) -> (MapGraph, ParseContext) {
    let mut ctx = ParseContext::default();
    let outcome = Pipeline::new().run(text, &mut ctx);
    (outcome.graph, ctx)
}

#[test]
fn returning_pair_gives_two_visits() {
    let text = "\
The Temple of Midgaard
You are in the southern end of the temple hall.
Exits: north
north
Temple Square
You are standing on the temple square.
Exits: south
south
The Temple of Midgaard
You are in the southern end of the temple hall.
Exits: north
";
    let (graph, _) = map(text);
    assert_eq!(graph.room_count(), 2);
    assert_eq!(graph.rooms()[0].visits, 2);
    assert_eq!(graph.rooms()[1].visits, 1);
}

#[test]
fn main_streets_stay_apart() {
    let text = "\
Main Street
The street runs past the bakery. Smells of bread drift by.
Exits: east west
east
Main Street
The street runs past the armory. Hammers ring out.
Exits: east west
east
Main Street
The street runs past the bakery. Smells of bread drift by.
Exits: east west
";
    let (graph, _) = map(text);
    assert_eq!(graph.room_count(), 2);
    let bakery = &graph.rooms()[0];
    assert_eq!(bakery.visits, 2);
    assert_ne!(graph.rooms()[0].key, graph.rooms()[1].key);
    assert!(bakery.key.as_str().starts_with("main-street--"));
}

#[test]
fn longer_prefix_when_descriptions_start_alike() {
    let text = "\
Corridor
A long dark corridor with stone walls to the north.
Exits: east
east
Corridor
A long dark corridor with stone walls to the south.
Exits: west
";
    let (graph, _) = map(text);
    let keys: Vec<_> = graph.rooms().iter().map(|r| r.key.as_str().to_string()).collect();
    assert_eq!(
        keys,
        vec![
            "corridor--a-long-dark-corridor-with-stone-walls-to-the-north",
            "corridor--a-long-dark-corridor-with-stone-walls-to-the-south",
        ]
    );
}

#[test]
fn prefix_length_is_configurable() {
    let text = "\
Main Street
The street runs past the bakery.
Exits: east
east
Main Street
The street runs past the armory.
Exits: west
";
    let mut ctx = ParseContext::new(ParseConfig::new().with_key_prefix_words(1));
    let graph = Pipeline::new().run(text, &mut ctx).graph;
    assert_eq!(
        graph.rooms()[0].key,
        RoomKey::new("main-street--the-street-runs-past-the-bakery")
    );
}

#[test]
fn failed_move_leaves_exit_dangling() {
    let text = "\
Inn
A cosy inn.
Exits: north
north
Alas, you cannot go that way.
";
    let (graph, ctx) = map(text);
    assert_eq!(graph.room_count(), 1);
    assert_eq!(graph.rooms()[0].exits[&Direction::North].to, None);
    assert_eq!(ctx.diagnostics.count(WarningKind::Correlation), 1);
}

#[test]
fn every_resolved_edge_points_at_a_room() {
    let text = "\
Inn
A cosy inn.
Exits: north
north
Yard
A muddy yard.
Exits: south east
east
Stable
A smelly stable.
Exits: west
west
Yard
A muddy yard.
Exits: south east
south
Inn
A cosy inn.
Exits: north
";
    let (graph, _) = map(text);
    assert_eq!(graph.room_count(), 3);
    assert_eq!(graph.dangling_count(), 0);
    for edge in graph.edges() {
        assert!(graph.room(edge.to.as_ref().unwrap()).is_some());
    }
}

#[test]
fn round_trip_does_not_merge_different_main_streets() {
    let text = "\
Main Street
The street runs past the bakery.
Exits: north
north
Road
A dusty road.
Exits: south
south
Main Street
The street runs past the armory.
Exits: north
";
    let (graph, _) = map(text);
    assert_eq!(graph.room_count(), 3);
    assert!(graph.rooms().iter().all(|r| r.visits == 1));
    assert_ne!(graph.rooms()[0].key, graph.rooms()[2].key);
}

#[test]
fn titles_that_slug_alike_get_distinct_keys() {
    let text = "\
Room
A bare room.
Exits: east
east
Room -
A second bare room.
Exits: east
east
Room 2
A third bare room.
Exits: west
";
    let (graph, _) = map(text);
    let keys: Vec<_> = graph.rooms().iter().map(|r| r.key.as_str().to_string()).collect();
    assert_eq!(keys, vec!["room", "room-3", "room-2"]);
    for room in graph.rooms() {
        assert_eq!(graph.room(&room.key).map(|r| &r.title), Some(&room.title));
    }
}
