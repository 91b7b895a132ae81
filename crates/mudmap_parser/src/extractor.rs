//! Parses an observation block into an [`ObservedRoom`].

use thiserror::Error;

use mudmap_foundation::{
    ExitToken, LineRange, MentionKind, ObservationBlock, ObservedRoom, SourceLine,
};

use crate::exits::{exit_line_rest, parse_exit_list, parse_listing_entry};
use crate::mention::parse_mention;

/// Why an observation block could not be read as a room.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExtractFailure {
    /// The first line is empty or is itself an exit line.
    #[error("observation has no title")]
    MissingTitle,
    /// No line starts with an exit lead.
    #[error("observation '{title}' has no exit line")]
    MissingExits {
        /// Title of the block.
        title: String,
    },
    /// Nothing between the title and the mentions reads as a description.
    #[error("observation '{title}' has no description")]
    MissingDescription {
        /// Title of the block.
        title: String,
    },
}

/// How one body line was read.
enum BodyLine<'a> {
    Break,
    Text(&'a str),
    Mention,
}

/// Extracts a room from an observation block.
///
/// # Errors
///
/// Returns an [`ExtractFailure`] if the title, exit line, or description is
/// missing. Callers skip such blocks with a warning.
pub fn extract(block: &ObservationBlock) -> Result<ObservedRoom, ExtractFailure> {
    let Some((title_line, body)) = block.lines.split_first() else {
        return Err(ExtractFailure::MissingTitle);
    };
    let title = title_line.text.trim();
    if title.is_empty() || exit_line_rest(title).is_some() {
        return Err(ExtractFailure::MissingTitle);
    }

    let Some(exit_pos) = body.iter().position(|l| exit_line_rest(&l.text).is_some()) else {
        return Err(ExtractFailure::MissingExits {
            title: title.to_string(),
        });
    };
    let rest = exit_line_rest(&body[exit_pos].text).unwrap_or_default();
    let mut exits = parse_exit_list(rest);

    // A bare "Obvious exits:" line is followed by one "North - Place" line per exit.
    let mut after_exits = exit_pos + 1;
    if exits.is_empty() && rest.is_empty() {
        while let Some(entry) = body.get(after_exits).and_then(|l| parse_listing_entry(&l.text)) {
            exits.push(entry);
            after_exits += 1;
        }
    }

    let mut npcs = Vec::new();
    let mut items = Vec::new();
    let before = read_body(&body[..exit_pos], &mut npcs, &mut items);
    let after = read_body(&body[after_exits..], &mut npcs, &mut items);

    let mut description: Vec<&str> = before
        .iter()
        .filter_map(|line| match line {
            BodyLine::Text(text) => Some(*text),
            _ => None,
        })
        .collect();
    if description.is_empty() {
        description = first_paragraph(&after);
    }
    if description.is_empty() {
        return Err(ExtractFailure::MissingDescription {
            title: title.to_string(),
        });
    }

    Ok(ObservedRoom {
        title: title.to_string(),
        body_text: description.join(" "),
        exits,
        npcs,
        items,
        source_block_index: block.index,
        lines: LineRange::of(&block.lines),
        zone_hint: block.zone_hint.clone(),
    })
}

fn read_body<'a>(
    lines: &'a [SourceLine],
    npcs: &mut Vec<String>,
    items: &mut Vec<String>,
) -> Vec<BodyLine<'a>> {
    lines
        .iter()
        .map(|line| {
            let text = line.text.trim();
            if text.is_empty() {
                return BodyLine::Break;
            }
            match parse_mention(text) {
                Some((MentionKind::Npc, name)) => {
                    push_unique(npcs, name);
                    BodyLine::Mention
                }
                Some((MentionKind::Item, name)) => {
                    push_unique(items, name);
                    BodyLine::Mention
                }
                None => BodyLine::Text(text),
            }
        })
        .collect()
}

fn first_paragraph<'a>(lines: &[BodyLine<'a>]) -> Vec<&'a str> {
    lines
        .iter()
        .skip_while(|line| matches!(line, BodyLine::Break))
        .map_while(|line| match line {
            BodyLine::Text(text) => Some(*text),
            _ => None,
        })
        .collect()
}

fn push_unique(names: &mut Vec<String>, name: String) {
    if !names.contains(&name) {
        names.push(name);
    }
}

/// Exit tokens that did not normalize to a direction.
pub fn unknown_exits(room: &ObservedRoom) -> impl Iterator<Item = &ExitToken> {
    room.exits.iter().filter(|token| token.direction.is_none())
}
