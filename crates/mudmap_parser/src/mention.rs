//! NPC and item mention lines.
//!
//! Lines like "A cityguard is standing here." or "You see a long sword here."
//! name something present in the room. Only the name is kept; deciding what
//! the thing really is belongs to whoever stores the map.

use mudmap_foundation::MentionKind;

/// One mention shape: optional prefix, required suffix.
#[derive(Clone, Copy, Debug)]
struct MentionPattern {
    prefix: &'static str,
    suffix: &'static str,
    kind: MentionKind,
}

const fn pattern(prefix: &'static str, suffix: &'static str, kind: MentionKind) -> MentionPattern {
    MentionPattern {
        prefix,
        suffix,
        kind,
    }
}

/// Tried in order; the generic "is here" comes last.
const MENTION_PATTERNS: &[MentionPattern] = &[
    pattern("you see ", " here", MentionKind::Item),
    pattern("", " is lying here", MentionKind::Item),
    pattern("", " are lying here", MentionKind::Item),
    pattern("", " lies here", MentionKind::Item),
    pattern("", " lie here", MentionKind::Item),
    pattern("", " has been left here", MentionKind::Item),
    pattern("", " have been left here", MentionKind::Item),
    pattern("", " is on the ground", MentionKind::Item),
    pattern("", " is standing here", MentionKind::Npc),
    pattern("", " are standing here", MentionKind::Npc),
    pattern("", " stands here", MentionKind::Npc),
    pattern("", " is sitting here", MentionKind::Npc),
    pattern("", " is resting here", MentionKind::Npc),
    pattern("", " is sleeping here", MentionKind::Npc),
    pattern("", " is waiting here", MentionKind::Npc),
    pattern("", " is floating here", MentionKind::Npc),
    pattern("", " is kneeling here", MentionKind::Npc),
    pattern("", " is wandering around", MentionKind::Npc),
    pattern("", " wanders around", MentionKind::Npc),
    pattern("", " is here", MentionKind::Npc),
    pattern("", " are here", MentionKind::Npc),
];

/// Longest name accepted, in words.
const MAX_NAME_WORDS: usize = 10;

/// Parses a mention line into its kind and the name it mentions.
#[must_use]
pub fn parse_mention(line: &str) -> Option<(MentionKind, String)> {
    let text = strip_flags(line.trim()).trim_end_matches(['.', '!']).trim_end();
    MENTION_PATTERNS.iter().find_map(|p| {
        let rest = strip_prefix_ci(text, p.prefix)?;
        let name = strip_suffix_ci(rest, p.suffix)?.trim();
        let words = name.split_whitespace().count();
        if words == 0 || words > MAX_NAME_WORDS || name.contains(['.', '!', '?']) {
            return None;
        }
        Some((p.kind, name.to_string()))
    })
}

/// Returns true if `line` names an NPC or item.
#[must_use]
pub fn is_mention(line: &str) -> bool {
    parse_mention(line).is_some()
}

/// Drops leading flag groups like `(Glowing)`, `(Invis)` or counts like `[ 3]`.
fn strip_flags(mut text: &str) -> &str {
    loop {
        let close = match text.chars().next() {
            Some('(') => ')',
            Some('[') => ']',
            _ => return text,
        };
        match text.find(close) {
            Some(end) => text = text[end + 1..].trim_start(),
            None => return text,
        }
    }
}

fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

fn strip_suffix_ci<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let start = text.len().checked_sub(suffix.len())?;
    let tail = text.get(start..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &text[..start])
}
