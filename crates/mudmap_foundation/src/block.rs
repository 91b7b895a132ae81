//! Transcript blocks produced by segmentation.

use std::fmt;

/// One transcript line with its 1-based line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the transcript.
    pub number: usize,
    /// Line text with trailing whitespace removed.
    pub text: String,
}

impl SourceLine {
    /// Creates a source line.
    #[must_use]
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Returns true if the line holds only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Inclusive range of transcript lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineRange {
    /// First line (1-based).
    pub start: usize,
    /// Last line (1-based, inclusive).
    pub end: usize,
}

impl LineRange {
    /// Creates a range covering `start..=end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Range covering a slice of lines. Empty slices map to line 0.
    #[must_use]
    pub fn of(lines: &[SourceLine]) -> Self {
        match (lines.first(), lines.last()) {
            (Some(first), Some(last)) => Self::new(first.number, last.number),
            _ => Self::new(0, 0),
        }
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "line {}", self.start)
        } else {
            write!(f, "lines {}-{}", self.start, self.end)
        }
    }
}

/// A fragment that looked like a room: title, description, exit line and
/// whatever followed it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservationBlock {
    /// Position in the block sequence.
    pub index: usize,
    /// Lines of the block; the first is the title candidate.
    pub lines: Vec<SourceLine>,
    /// Zone banner seen just before this observation.
    pub zone_hint: Option<String>,
}

/// A command typed by the player, with whatever the game printed before the
/// next block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandBlock {
    /// Position in the block sequence.
    pub index: usize,
    /// The command with any prompt prefix removed.
    pub command: SourceLine,
    /// Lines printed in response that were not part of a room.
    pub response: Vec<SourceLine>,
}

/// A segmented transcript fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawBlock {
    /// A room observation.
    Observation(ObservationBlock),
    /// A command line.
    Command(CommandBlock),
}

impl RawBlock {
    /// Position of this block in the segmented transcript.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Observation(obs) => obs.index,
            Self::Command(cmd) => cmd.index,
        }
    }

    /// Transcript lines covered by this block.
    #[must_use]
    pub fn lines(&self) -> LineRange {
        match self {
            Self::Observation(obs) => LineRange::of(&obs.lines),
            Self::Command(cmd) => {
                let end = cmd.response.last().map_or(cmd.command.number, |l| l.number);
                LineRange::new(cmd.command.number, end)
            }
        }
    }

    /// Returns the observation, if this is one.
    #[must_use]
    pub fn as_observation(&self) -> Option<&ObservationBlock> {
        match self {
            Self::Observation(obs) => Some(obs),
            Self::Command(_) => None,
        }
    }

    /// Returns the command, if this is one.
    #[must_use]
    pub fn as_command(&self) -> Option<&CommandBlock> {
        match self {
            Self::Command(cmd) => Some(cmd),
            Self::Observation(_) => None,
        }
    }
}
