//! The ten canonical movement directions.
//!
//! Every direction word the engine meets (exit tokens, movement commands,
//! Diku exit listings) goes through [`Direction::parse`], and the opposite
//! lookup used to pair traversals comes from the same table.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A canonical movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// North.
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
    /// Northeast.
    Northeast,
    /// Northwest.
    Northwest,
    /// Southeast.
    Southeast,
    /// Southwest.
    Southwest,
}

/// Every word (canonical name or synonym) that normalizes to a direction.
///
/// Lookups are case-insensitive; hyphens and inner spaces are removed before
/// the lookup, so `north-east` and `North East` both land on `northeast`.
const DIRECTION_TABLE: &[(&str, Direction)] = &[
    // Cardinal directions
    ("north", Direction::North),
    ("n", Direction::North),
    ("south", Direction::South),
    ("s", Direction::South),
    ("east", Direction::East),
    ("e", Direction::East),
    ("west", Direction::West),
    ("w", Direction::West),
    // Vertical directions
    ("up", Direction::Up),
    ("u", Direction::Up),
    ("down", Direction::Down),
    ("d", Direction::Down),
    // Diagonal directions
    ("northeast", Direction::Northeast),
    ("ne", Direction::Northeast),
    ("northwest", Direction::Northwest),
    ("nw", Direction::Northwest),
    ("southeast", Direction::Southeast),
    ("se", Direction::Southeast),
    ("southwest", Direction::Southwest),
    ("sw", Direction::Southwest),
];

impl Direction {
    /// All ten directions in canonical order.
    pub const ALL: [Direction; 10] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
        Direction::Northeast,
        Direction::Northwest,
        Direction::Southeast,
        Direction::Southwest,
    ];

    /// Normalizes a direction word or abbreviation.
    ///
    /// Returns `None` for anything outside the table.
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        let folded: String = word
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | ' ' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        if folded.is_empty() {
            return None;
        }
        DIRECTION_TABLE
            .iter()
            .find(|(name, _)| *name == folded)
            .map(|(_, dir)| *dir)
    }

    /// Returns the direction that undoes this one.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Northeast => Self::Southwest,
            Self::Southwest => Self::Northeast,
            Self::Northwest => Self::Southeast,
            Self::Southeast => Self::Northwest,
        }
    }

    /// The canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
        }
    }

    /// Iterates over every word in the normalization table.
    pub fn table() -> impl Iterator<Item = (&'static str, Direction)> {
        DIRECTION_TABLE.iter().copied()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a direction word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a direction: {0}")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownDirection(s.to_string()))
    }
}
