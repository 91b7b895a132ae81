//! Robustness against arbitrary input.

use mudmap_engine::Pipeline;
use mudmap_foundation::ParseContext;
use proptest::prelude::*;

proptest! {
    #[test]
    fn pipeline_never_panics(text in "(?s).{0,500}") {
        let mut ctx = ParseContext::default();
        let outcome = Pipeline::new().run(&text, &mut ctx);
        prop_assert!(outcome.graph.room_count() <= outcome.observations.len());
    }

    #[test]
    fn pipeline_never_panics_on_line_soup(
        lines in prop::collection::vec("[A-Za-z ,.:()\\[\\]<>]{0,40}", 0..60)
    ) {
        let mut ctx = ParseContext::default();
        let outcome = Pipeline::new().run(&lines.join("\n"), &mut ctx);
        for room in outcome.graph.rooms() {
            prop_assert!(room.visits >= 1);
            prop_assert!(!room.key.as_str().is_empty());
        }
    }

    #[test]
    fn keys_are_unique(lines in prop::collection::vec(
        prop_oneof![
            Just("Main Street"),
            Just("Main  street"),
            Just("MAIN STREET!"),
            Just("The street runs past the bakery."),
            Just("The street runs past the armory."),
            Just("Exits: north south"),
            Just("north"),
            Just("south"),
        ],
        0..60,
    )) {
        let mut ctx = ParseContext::default();
        let graph = Pipeline::new().run(&lines.join("\n"), &mut ctx).graph;
        let mut keys: Vec<_> = graph.rooms().iter().map(|r| r.key.clone()).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), total);
    }
}
