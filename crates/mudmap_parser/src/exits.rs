//! Exit line recognition and door markers.

use mudmap_foundation::{Direction, DoorInfo, ExitToken};

use crate::tokenizer::ExitTokenizer;

/// Lead phrases that open an exit line, longest first.
const EXIT_LEADS: &[&str] = &[
    "there are no obvious exits",
    "you see exits leading",
    "obvious exits are",
    "obvious exits:",
    "visible exits:",
    "obvious exits",
    "exits are",
    "exits:",
    "exit:",
];

/// Words in a marker that describe the door's state rather than its name.
const DOOR_STATE_WORDS: &[&str] = &["closed", "locked", "open", "shut"];

/// Returns the text after the exit lead if `line` is an exit line.
///
/// Accepts the bracketed form `[Exits: north south]` as well.
#[must_use]
pub fn exit_line_rest(line: &str) -> Option<&str> {
    let mut text = line.trim();
    let bracketed = text.starts_with('[') && text.ends_with(']') && text.len() >= 2;
    if bracketed {
        text = text[1..text.len() - 1].trim();
    }
    EXIT_LEADS.iter().find_map(|lead| {
        let head = text.get(..lead.len())?;
        if !head.eq_ignore_ascii_case(lead) {
            return None;
        }
        let rest = &text[lead.len()..];
        // "exits:" must not match "exitsfoo"; leads ending in a word need a boundary.
        if !lead.ends_with(':') && rest.chars().next().is_some_and(char::is_alphanumeric) {
            return None;
        }
        Some(rest.trim_start_matches(':').trim())
    })
}

/// Returns true if `line` opens an exit list.
#[must_use]
pub fn is_exit_line(line: &str) -> bool {
    exit_line_rest(line).is_some()
}

/// Parses the text after an exit lead into tokens.
#[must_use]
pub fn parse_exit_list(rest: &str) -> Vec<ExitToken> {
    ExitTokenizer::tokenize(rest)
        .into_iter()
        .filter(|raw| !matches!(raw.to_ascii_lowercase().as_str(), "none" | "nothing" | "-"))
        .map(|raw| exit_token(&raw))
        .collect()
}

/// Parses one Diku listing entry such as `North - Temple Square` or
/// `Down  - (closed trapdoor)`.
#[must_use]
pub fn parse_listing_entry(line: &str) -> Option<ExitToken> {
    let (word, target) = line.trim().split_once(" - ")?;
    let direction = Direction::parse(word)?;
    let target = target.trim();
    let lowered = target.to_ascii_lowercase();
    let door = if lowered.contains("closed") || lowered.contains("locked") {
        Some(door_from_marker(
            target.trim_matches(|c| matches!(c, '(' | ')' | '[' | ']')),
        ))
    } else {
        None
    };
    Some(ExitToken {
        raw: line.trim().to_string(),
        direction: Some(direction),
        door,
    })
}

/// Builds an exit token from raw text, reading any door marker.
#[must_use]
pub fn exit_token(raw: &str) -> ExitToken {
    let text = raw.trim();

    // (north) or [north]: the exit is behind a closed door.
    if let Some(inner) = strip_brackets(text) {
        if let Some(direction) = Direction::parse(inner) {
            return ExitToken {
                raw: text.to_string(),
                direction: Some(direction),
                door: Some(DoorInfo::new("door")),
            };
        }
    }

    // south(door), south[locked gate]
    if let Some(open) = text.find(['(', '[', '{']) {
        let word = &text[..open];
        let marker = text[open..].trim_matches(|c| matches!(c, '(' | ')' | '[' | ']' | '{' | '}'));
        return ExitToken {
            raw: text.to_string(),
            direction: Direction::parse(word),
            door: Some(door_from_marker(marker)),
        };
    }

    // south* or *south*
    if text.contains('*') {
        return ExitToken {
            raw: text.to_string(),
            direction: Direction::parse(text.trim_matches('*')),
            door: Some(DoorInfo::new("door")),
        };
    }

    ExitToken {
        raw: text.to_string(),
        direction: Direction::parse(text),
        door: None,
    }
}

fn strip_brackets(text: &str) -> Option<&str> {
    let inner = text
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .or_else(|| text.strip_prefix('[').and_then(|t| t.strip_suffix(']')))?;
    Some(inner.trim())
}

fn door_from_marker(marker: &str) -> DoorInfo {
    let locked = marker.to_ascii_lowercase().contains("locked");
    let name: Vec<&str> = marker
        .split_whitespace()
        .filter(|word| {
            !DOOR_STATE_WORDS
                .iter()
                .any(|state| word.eq_ignore_ascii_case(state))
        })
        .collect();
    let name = if name.is_empty() {
        "door".to_string()
    } else {
        name.join(" ")
    };
    DoorInfo { name, locked }
}
