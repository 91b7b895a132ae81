//! Zone resolution tests through the whole pipeline.

use mudmap_engine::Pipeline;
use mudmap_foundation::{ParseConfig, ParseContext, WarningKind, Zone};

const TWO_ZONES: &str = "\
[Zone: Midgaard]
City Gate
The western gate of the city.
Exits: west
west
Road
A dusty road.
Exits: east west
west
Road End
The road ends here at the forest edge.
Exits: east west
west
You have entered the area of Haon-Dor.
Forest Path
Tall trees surround you.
Exits: east
";

#[test]
fn banners_spread_to_nearest_rooms() {
    let mut ctx = ParseContext::default();
    let graph = Pipeline::new().run(TWO_ZONES, &mut ctx).graph;
    let zones: Vec<_> = graph.rooms().iter().map(|r| r.zone.to_string()).collect();
    assert_eq!(zones, vec!["Midgaard", "Midgaard", "Haon-Dor", "Haon-Dor"]);
    assert_eq!(ctx.diagnostics.count(WarningKind::Zone), 0);
}

#[test]
fn zone_override_ignores_banners() {
    let mut ctx = ParseContext::new(ParseConfig::new().with_zone_override(Some(30)));
    let graph = Pipeline::new().run(TWO_ZONES, &mut ctx).graph;
    assert!(graph.rooms().iter().all(|r| r.zone == Zone::Explicit(30)));
}

#[test]
fn no_banner_leaves_rooms_unassigned() {
    let mut ctx = ParseContext::default();
    let graph = Pipeline::new()
        .run("Inn\nA cosy inn.\nExits: north\n", &mut ctx)
        .graph;
    assert!(graph.rooms()[0].zone.is_unassigned());
    assert_eq!(ctx.diagnostics.count(WarningKind::Zone), 1);
}
