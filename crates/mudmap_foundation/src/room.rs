//! The map data model: observations, canonical rooms, edges, and zones.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::block::LineRange;
use crate::direction::Direction;

/// Index of an [`ObservedRoom`] in the correlator's observation list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObservationId(pub usize);

/// A closable barrier on an exit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoorInfo {
    /// Name of the barrier ("door", "gate", ...).
    pub name: String,
    /// Whether the transcript marked the barrier as locked.
    pub locked: bool,
}

impl DoorInfo {
    /// Creates an unlocked door.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locked: false,
        }
    }

    /// Builder method to mark the door locked.
    #[must_use]
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}

/// One entry of an exit line, as printed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExitToken {
    /// Raw token text, markers included.
    pub raw: String,
    /// Normalized direction, if the word is in the table.
    pub direction: Option<Direction>,
    /// Door marker attached to the token.
    pub door: Option<DoorInfo>,
}

/// Whether a mention line named a creature or an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MentionKind {
    /// A non-player character.
    Npc,
    /// An item on the ground.
    Item,
}

/// A room as seen on one visit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservedRoom {
    /// Title line as printed.
    pub title: String,
    /// Description paragraph, lines joined with single spaces.
    pub body_text: String,
    /// Exit tokens in printed order.
    pub exits: Vec<ExitToken>,
    /// Creatures mentioned in the block.
    pub npcs: Vec<String>,
    /// Items mentioned in the block.
    pub items: Vec<String>,
    /// Index of the source block.
    pub source_block_index: usize,
    /// Transcript lines of the source block.
    pub lines: LineRange,
    /// Zone banner seen just before the room.
    pub zone_hint: Option<String>,
}

impl ObservedRoom {
    /// Title trimmed and case-folded.
    #[must_use]
    pub fn normalized_title(&self) -> String {
        normalize_title(&self.title)
    }

    /// Description trimmed with whitespace collapsed.
    #[must_use]
    pub fn normalized_description(&self) -> String {
        normalize_text(&self.body_text)
    }

    /// Returns true if both observations print the same title and
    /// description once normalized.
    #[must_use]
    pub fn same_text(&self, other: &ObservedRoom) -> bool {
        self.normalized_title() == other.normalized_title()
            && self.normalized_description() == other.normalized_description()
    }

    /// Directions listed on the exit line.
    pub fn exit_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.exits.iter().filter_map(|token| token.direction)
    }

    /// Door marker on the exit in `direction`, if any.
    #[must_use]
    pub fn door_towards(&self, direction: Direction) -> Option<&DoorInfo> {
        self.exits
            .iter()
            .find(|token| token.direction == Some(direction))
            .and_then(|token| token.door.as_ref())
    }
}

/// Trims and case-folds a title.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    normalize_text(title).to_lowercase()
}

/// Trims and collapses runs of whitespace to single spaces.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A command recognized as a directional move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovementEvent {
    /// Normalized direction.
    pub direction: Direction,
    /// Index of the command block.
    pub source_block_index: usize,
}

/// Stable identity of a canonical room.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RoomKey(String);

impl RoomKey {
    /// Wraps an already-computed key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Zone assignment of a canonical room.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Zone {
    /// Zone id supplied by the caller.
    Explicit(u64),
    /// Zone named by a banner line in the transcript.
    Named(String),
    /// No zone could be determined.
    #[default]
    Unassigned,
}

impl Zone {
    /// Text of the sentinel zone.
    pub const UNASSIGNED: &'static str = "unassigned";

    /// Returns true for the sentinel.
    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        matches!(self, Self::Unassigned)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(id) => write!(f, "{id}"),
            Self::Named(name) => f.write_str(name),
            Self::Unassigned => f.write_str(Self::UNASSIGNED),
        }
    }
}

#[cfg(feature = "serde")]
mod zone_serde {
    use super::Zone;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Zone {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                Zone::Explicit(id) => serializer.serialize_u64(*id),
                Zone::Named(name) => serializer.serialize_str(name),
                Zone::Unassigned => serializer.serialize_str(Zone::UNASSIGNED),
            }
        }
    }

    impl<'de> Deserialize<'de> for Zone {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            #[derive(Deserialize)]
            #[serde(untagged)]
            enum Raw {
                Id(u64),
                Name(String),
            }

            Ok(match Raw::deserialize(deserializer)? {
                Raw::Id(id) => Zone::Explicit(id),
                Raw::Name(name) if name == Zone::UNASSIGNED => Zone::Unassigned,
                Raw::Name(name) => Zone::Named(name),
            })
        }
    }
}

/// Where one exit of a canonical room leads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exit {
    /// Destination, or `None` for a dangling exit.
    pub to: Option<RoomKey>,
    /// Door metadata, if the exit is barred.
    pub door: Option<DoorInfo>,
}

/// A directed exit between canonical rooms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Source room.
    pub from: RoomKey,
    /// Direction of travel.
    pub direction: Direction,
    /// Destination room, `None` when unresolved.
    pub to: Option<RoomKey>,
    /// Door metadata.
    pub door: Option<DoorInfo>,
}

/// A deduplicated room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalRoom {
    /// Stable identity.
    pub key: RoomKey,
    /// Title as first printed.
    pub title: String,
    /// Longest description observed.
    pub description: String,
    /// Creatures seen across all visits.
    pub npcs: Vec<String>,
    /// Items seen across all visits.
    pub items: Vec<String>,
    /// Number of observations merged into this room.
    pub visits: usize,
    /// Block index of the first observation.
    pub first_seen: usize,
    /// First zone banner attached to any of the observations.
    pub zone_hint: Option<String>,
    /// Zone assignment, written by the zone resolver.
    pub zone: Zone,
    /// Outgoing exits, one per direction.
    pub exits: BTreeMap<Direction, Exit>,
}

impl CanonicalRoom {
    /// Outgoing edges in canonical direction order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.exits.iter().map(|(direction, exit)| Edge {
            from: self.key.clone(),
            direction: *direction,
            to: exit.to.clone(),
            door: exit.door.clone(),
        })
    }

    /// Number of exits with no known destination.
    #[must_use]
    pub fn dangling_exits(&self) -> usize {
        self.exits.values().filter(|exit| exit.to.is_none()).count()
    }
}
