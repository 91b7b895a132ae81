//! Segmenter tests.

use mudmap_foundation::{LineRange, ParseConfig, ParseContext, RawBlock};
use mudmap_parser::{LineClass, LineCursor, LineMatcher, MatcherSet, Segmenter};
use proptest::prelude::*;

fn segment(text: &str) -> Vec<RawBlock> {
    let mut ctx = ParseContext::default();
    Segmenter::new().segment(text, &mut ctx)
}

const PROMPTED: &str = "\
> look
The Temple of Midgaard
You are in the southern end of the temple hall.
Exits: north, south(door)
The cityguard is standing here.
<20hp 10m> north
Temple Square
You are standing on the temple square.
[Exits: south]
>
";

#[test]
fn splits_observations_and_commands() {
    let blocks = segment(PROMPTED);
    assert_eq!(blocks.len(), 4);

    let look = blocks[0].as_command().unwrap();
    assert_eq!(look.command.text, "look");
    assert!(look.response.is_empty());

    let temple = blocks[1].as_observation().unwrap();
    assert_eq!(temple.lines[0].text, "The Temple of Midgaard");
    assert_eq!(blocks[1].lines(), LineRange::new(2, 5));
    assert_eq!(blocks[1].lines().to_string(), "lines 2-5");

    let north = blocks[2].as_command().unwrap();
    assert_eq!(north.command.text, "north");
    assert_eq!(north.command.number, 6);

    let square = blocks[3].as_observation().unwrap();
    assert_eq!(square.lines.len(), 3);
}

#[test]
fn block_indices_follow_order() {
    for (pos, block) in segment(PROMPTED).iter().enumerate() {
        assert_eq!(block.index(), pos);
    }
}

#[test]
fn no_rooms_means_no_blocks() {
    assert!(segment("").is_empty());
    assert!(segment("hello there\nnorth\nsay hi\n").is_empty());
}

#[test]
fn failure_text_stays_with_the_command() {
    let blocks = segment(
        "Inn\nA cosy inn.\nExits: north\neast\nAlas, you cannot go that way.\n",
    );
    let east = blocks[1].as_command().unwrap();
    assert_eq!(east.response.len(), 1);
    assert_eq!(east.response[0].text, "Alas, you cannot go that way.");
}

#[test]
fn zone_banner_tags_the_next_room() {
    let blocks = segment("[Zone: Midgaard]\nInn\nA cosy inn.\nExits: north\n");
    let inn = blocks[0].as_observation().unwrap();
    assert_eq!(inn.zone_hint.as_deref(), Some("Midgaard"));
}

#[test]
fn trailing_blank_lines_are_trimmed() {
    let blocks = segment("Inn\nA cosy inn.\nExits: north\n\n\n");
    assert_eq!(blocks[0].lines(), LineRange::new(1, 3));
}

#[test]
fn windows_line_endings() {
    let blocks = segment("Inn\r\nA cosy inn.\r\nExits: north\r\nn\r\nYard\r\nA yard.\r\nExits: s\r\n");
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[1].as_command().unwrap().command.text, "n");
}

/// Treats `# ...` lines as prompts so they are dropped.
#[derive(Debug)]
struct CommentMatcher;

impl LineMatcher for CommentMatcher {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn classify(&self, cursor: &LineCursor<'_>, _config: &ParseConfig) -> Option<LineClass> {
        cursor
            .current()
            .text
            .starts_with('#')
            .then_some(LineClass::Prompt)
    }
}

#[test]
fn custom_matcher_takes_priority() {
    let mut matchers = MatcherSet::standard();
    matchers.insert(0, CommentMatcher);
    assert_eq!(matchers.names().next(), Some("comment"));

    let mut ctx = ParseContext::default();
    let blocks = Segmenter::with_matchers(matchers).segment(
        "Inn\n# logged at noon\nA cosy inn.\nExits: north\n",
        &mut ctx,
    );
    let inn = blocks[0].as_observation().unwrap();
    assert!(inn.lines.iter().all(|l| !l.text.starts_with('#')));
    assert_eq!(inn.lines.len(), 3);
}

proptest! {
    #[test]
    fn never_panics(text in "(?s).{0,300}") {
        let blocks = segment(&text);
        for (pos, block) in blocks.iter().enumerate() {
            prop_assert_eq!(block.index(), pos);
        }
    }
}
