//! Movement correlation tests.

use mudmap_engine::{Correlation, Correlator};
use mudmap_foundation::{Direction, ObservationId, ParseContext, WarningKind};
use mudmap_parser::Segmenter;

fn correlate(text: &str) -> (Correlation, ParseContext) {
    let mut ctx = ParseContext::default();
    let blocks = Segmenter::new().segment(text, &mut ctx);
    let correlation = Correlator::new().correlate(&blocks, &mut ctx);
    (correlation, ctx)
}

#[test]
fn abbreviated_and_verbed_moves() {
    let text = "\
Inn
A cosy inn.
Exits: north
n
Yard
A muddy yard.
Exits: south east
go east
Stable
A smelly stable.
Exits: west
";
    let (c, ctx) = correlate(text);
    let moves: Vec<_> = c
        .traversals
        .iter()
        .map(|t| (t.from, t.direction, t.to))
        .collect();
    assert_eq!(
        moves,
        vec![
            (ObservationId(0), Direction::North, ObservationId(1)),
            (ObservationId(1), Direction::East, ObservationId(2)),
        ]
    );
    assert!(ctx.diagnostics.is_empty());
}

#[test]
fn look_does_not_move_the_player() {
    let text = "\
Inn
A cosy inn.
Exits: north
look
Inn
A cosy inn.
Exits: north
north
Yard
A muddy yard.
Exits: south
";
    let (c, _) = correlate(text);
    assert_eq!(c.traversals.len(), 1);
    assert_eq!(c.traversals[0].from, ObservationId(1));
}

#[test]
fn door_refusal_drops_the_edge() {
    let text = "\
Inn
A cosy inn.
Exits: north (door)
north
The door is closed.
";
    let (c, ctx) = correlate(text);
    assert!(c.traversals.is_empty());
    let warning = &ctx.diagnostics.warnings()[0];
    assert_eq!(warning.kind, WarningKind::Correlation);
    assert!(warning.message.contains("The door is closed."));
    assert!(warning.to_string().starts_with("[correlation] lines 4-5: "));
}

#[test]
fn back_and_forth_pairs() {
    let text = "\
Inn
A cosy inn.
Exits: north
north
Yard
A muddy yard.
Exits: south
south
Inn
A cosy inn.
Exits: north
north
Yard
A muddy yard.
Exits: south
";
    let (c, _) = correlate(text);
    assert_eq!(c.traversals.len(), 3);
    assert_eq!(c.pairs, vec![(0, 1)]);
}
