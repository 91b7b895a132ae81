//! Prompt stripping and command recognition.

use mudmap_foundation::{CommandBlock, Direction, MovementEvent};

/// Verbs that may precede a direction ("go north", "walk n").
const MOVE_VERBS: &[&str] = &[
    "go", "walk", "move", "run", "head", "travel", "climb", "fly", "swim", "ride",
];

/// First words of common commands that do not move the player.
const COMMAND_VERBS: &[&str] = &[
    "look", "l", "exits", "ex", "scan", "examine", "exa", "x", "inventory", "inv", "i",
    "equipment", "eq", "score", "sc", "who", "where", "open", "close", "unlock", "lock",
    "get", "take", "drop", "put", "give", "wear", "wield", "remove", "kill", "k", "attack",
    "cast", "c", "consider", "con", "flee", "follow", "sleep", "rest", "wake", "stand", "sit",
    "search", "recall", "save", "quaff", "recite", "eat", "drink", "say", "tell", "buy",
    "sell", "list",
];

/// Phrases games print when a move is refused, matched case-insensitively
/// anywhere in a response line.
const FAILURE_PHRASES: &[&str] = &[
    "cannot go that way",
    "can't go that way",
    "can not go that way",
    "no exit in that direction",
    "no exit that way",
    "there is no exit",
    "you can't go there",
    "you cannot go there",
    "is closed",
    "is locked",
    "seems to be closed",
    "you are too exhausted",
    "you are too tired",
    "your legs are too tired",
    "you need a boat",
    "you would need to fly",
    "you can't do that",
    "you are fighting",
    "no way!",
    "huh?",
];

/// Longest non-movement command recognized, in words.
const MAX_COMMAND_WORDS: usize = 3;

/// Splits a leading prompt (`>`, `<20hp 10m>`) off a line.
///
/// Returns the text after the prompt and whether a prompt was present.
#[must_use]
pub fn strip_prompt(line: &str) -> (&str, bool) {
    let mut text = line.trim();
    let mut prompted = false;
    loop {
        if let Some(rest) = text.strip_prefix('>') {
            text = rest.trim_start();
            prompted = true;
        } else if text.starts_with('<') {
            match text.find('>') {
                Some(end) => {
                    text = text[end + 1..].trim_start();
                    prompted = true;
                }
                None => return (text, prompted),
            }
        } else {
            return (text, prompted);
        }
    }
}

/// Parses a command text as a directional move.
///
/// Accepts a direction word or abbreviation, a move verb plus direction
/// (`go north`), and compound words (`north east`).
#[must_use]
pub fn parse_movement(text: &str) -> Option<Direction> {
    let words: Vec<String> = text
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect();
    match words.as_slice() {
        [word] => Direction::parse(word),
        [verb, word] if MOVE_VERBS.contains(&verb.as_str()) => Direction::parse(word),
        [first, second]
            if matches!(first.as_str(), "north" | "south")
                && matches!(second.as_str(), "east" | "west") =>
        {
            Direction::parse(&format!("{first}{second}"))
        }
        _ => None,
    }
}

/// Returns true if `text` looks like a typed non-movement command.
///
/// Typed commands are short and lowercase; a prompt prefix lifts the case
/// requirement.
#[must_use]
pub fn is_other_command(text: &str, prompted: bool) -> bool {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return false;
    };
    if words.count() + 1 > MAX_COMMAND_WORDS || text.ends_with(['.', '!', '?']) {
        return false;
    }
    if !prompted && first.chars().next().is_some_and(char::is_uppercase) {
        return false;
    }
    COMMAND_VERBS.contains(&first.to_ascii_lowercase().as_str())
}

/// Returns true if `line` reads as the game refusing a move
/// ("Alas, you cannot go that way.", "The door is closed.").
#[must_use]
pub fn is_failure_message(line: &str) -> bool {
    let lowered = line.trim().to_lowercase();
    !lowered.is_empty()
        && FAILURE_PHRASES
            .iter()
            .any(|phrase| lowered.contains(phrase))
}

/// Reads a command block as a movement event.
#[must_use]
pub fn movement_of(block: &CommandBlock) -> Option<MovementEvent> {
    parse_movement(&block.command.text).map(|direction| MovementEvent {
        direction,
        source_block_index: block.index,
    })
}
