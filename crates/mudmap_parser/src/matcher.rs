//! Prioritized line classifiers.
//!
//! Transcripts carry no markup, so each line is classified by trying a list
//! of matchers in order. A matcher answers `None` when it does not apply;
//! the first `Some` wins and anything unclaimed is [`LineClass::Text`].
//! New heuristics are added by inserting another matcher into the set.

use std::fmt;

use mudmap_foundation::{Direction, ParseConfig, SourceLine};

use crate::command::{is_other_command, parse_movement, strip_prompt};
use crate::exits::is_exit_line;
use crate::mention::is_mention;

/// What a transcript line is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineClass {
    /// Whitespace only.
    Blank,
    /// A prompt with nothing typed after it.
    Prompt,
    /// A zone or area banner naming the zone.
    ZoneBanner(String),
    /// A directional move (prompt removed).
    Movement {
        /// Command text.
        text: String,
        /// Normalized direction.
        direction: Direction,
    },
    /// Any other typed command (prompt removed).
    Command(String),
    /// The first line of a room observation.
    Title,
    /// Anything else.
    Text,
}

/// A position in the transcript with access to the lines after it.
#[derive(Clone, Copy, Debug)]
pub struct LineCursor<'a> {
    lines: &'a [SourceLine],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Creates a cursor at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of range.
    #[must_use]
    pub fn new(lines: &'a [SourceLine], pos: usize) -> Self {
        assert!(pos < lines.len(), "cursor out of range");
        Self { lines, pos }
    }

    /// The line under the cursor.
    #[must_use]
    pub fn current(&self) -> &'a SourceLine {
        &self.lines[self.pos]
    }

    /// The lines after the cursor.
    #[must_use]
    pub fn ahead(&self) -> &'a [SourceLine] {
        &self.lines[self.pos + 1..]
    }
}

/// A single line heuristic.
pub trait LineMatcher: fmt::Debug {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Classifies the current line, or `None` if this heuristic does not apply.
    fn classify(&self, cursor: &LineCursor<'_>, config: &ParseConfig) -> Option<LineClass>;
}

/// Matches empty lines.
#[derive(Debug)]
pub struct BlankMatcher;

impl LineMatcher for BlankMatcher {
    fn name(&self) -> &'static str {
        "blank"
    }

    fn classify(&self, cursor: &LineCursor<'_>, _config: &ParseConfig) -> Option<LineClass> {
        cursor.current().is_blank().then_some(LineClass::Blank)
    }
}

/// Matches prompts with no command after them.
#[derive(Debug)]
pub struct PromptMatcher;

impl LineMatcher for PromptMatcher {
    fn name(&self) -> &'static str {
        "prompt"
    }

    fn classify(&self, cursor: &LineCursor<'_>, _config: &ParseConfig) -> Option<LineClass> {
        let (rest, prompted) = strip_prompt(&cursor.current().text);
        (prompted && rest.is_empty()).then_some(LineClass::Prompt)
    }
}

/// Matches zone banners such as `[Zone: Midgaard]` or `You have entered Midgaard.`
#[derive(Debug)]
pub struct ZoneBannerMatcher;

const BANNER_LEADS: &[&str] = &["zone:", "area:", "you have entered the area of", "you have entered"];

impl LineMatcher for ZoneBannerMatcher {
    fn name(&self) -> &'static str {
        "zone-banner"
    }

    fn classify(&self, cursor: &LineCursor<'_>, _config: &ParseConfig) -> Option<LineClass> {
        zone_banner(&cursor.current().text).map(LineClass::ZoneBanner)
    }
}

/// Returns the zone named by a banner line.
#[must_use]
pub fn zone_banner(line: &str) -> Option<String> {
    let mut text = line.trim();
    if text.starts_with('[') && text.ends_with(']') && text.len() >= 2 {
        text = text[1..text.len() - 1].trim();
    }
    BANNER_LEADS.iter().find_map(|lead| {
        let head = text.get(..lead.len())?;
        if !head.eq_ignore_ascii_case(lead) {
            return None;
        }
        let name = text[lead.len()..].trim().trim_end_matches(['.', '!']).trim();
        (!name.is_empty() && name.split_whitespace().count() <= 6).then(|| name.to_string())
    })
}

/// Matches directional commands.
#[derive(Debug)]
pub struct MovementMatcher;

impl LineMatcher for MovementMatcher {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn classify(&self, cursor: &LineCursor<'_>, _config: &ParseConfig) -> Option<LineClass> {
        let (text, _) = strip_prompt(&cursor.current().text);
        parse_movement(text).map(|direction| LineClass::Movement {
            text: text.to_string(),
            direction,
        })
    }
}

/// Matches short typed commands that do not move the player.
#[derive(Debug)]
pub struct CommandMatcher;

impl LineMatcher for CommandMatcher {
    fn name(&self) -> &'static str {
        "command"
    }

    fn classify(&self, cursor: &LineCursor<'_>, _config: &ParseConfig) -> Option<LineClass> {
        let (text, prompted) = strip_prompt(&cursor.current().text);
        is_other_command(text, prompted).then(|| LineClass::Command(text.to_string()))
    }
}

/// Matches a room title: a short heading line followed, within the
/// look-ahead window, by an exit line and no command in between.
#[derive(Debug)]
pub struct TitleMatcher;

impl LineMatcher for TitleMatcher {
    fn name(&self) -> &'static str {
        "title"
    }

    fn classify(&self, cursor: &LineCursor<'_>, config: &ParseConfig) -> Option<LineClass> {
        let text = cursor.current().text.trim();
        if !title_shaped(text, config) {
            return None;
        }
        for line in cursor.ahead().iter().take(config.lookahead_lines) {
            if is_exit_line(&line.text) {
                return Some(LineClass::Title);
            }
            let (typed, prompted) = strip_prompt(&line.text);
            if parse_movement(typed).is_some()
                || is_other_command(typed, prompted)
                || (prompted && typed.is_empty())
                || zone_banner(&line.text).is_some()
            {
                return None;
            }
        }
        None
    }
}

fn title_shaped(text: &str, config: &ParseConfig) -> bool {
    let Some(first) = text.chars().next() else {
        return false;
    };
    !first.is_lowercase()
        && text.chars().count() <= config.max_title_len
        && text.split_whitespace().count() <= config.max_title_words
        && !text.ends_with(['.', '!', '?', ',', ';', ':'])
        && !is_exit_line(text)
        && !is_mention(text)
}

/// An ordered list of line matchers.
#[derive(Debug)]
pub struct MatcherSet {
    matchers: Vec<Box<dyn LineMatcher>>,
}

impl Default for MatcherSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl MatcherSet {
    /// An empty set; every line classifies as [`LineClass::Text`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// The standard heuristics in priority order.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            matchers: vec![
                Box::new(BlankMatcher),
                Box::new(PromptMatcher),
                Box::new(ZoneBannerMatcher),
                Box::new(MovementMatcher),
                Box::new(CommandMatcher),
                Box::new(TitleMatcher),
            ],
        }
    }

    /// Appends a matcher with the lowest priority.
    #[must_use]
    pub fn with(mut self, matcher: impl LineMatcher + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    /// Inserts a matcher at `priority` (0 = tried first).
    pub fn insert(&mut self, priority: usize, matcher: impl LineMatcher + 'static) {
        let priority = priority.min(self.matchers.len());
        self.matchers.insert(priority, Box::new(matcher));
    }

    /// Names of the matchers in priority order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.matchers.iter().map(|m| m.name())
    }

    /// Classifies the line under the cursor.
    #[must_use]
    pub fn classify(&self, cursor: &LineCursor<'_>, config: &ParseConfig) -> LineClass {
        self.matchers
            .iter()
            .find_map(|m| m.classify(cursor, config))
            .unwrap_or(LineClass::Text)
    }
}
