//! The storage collaborator contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use mudmap_foundation::{CanonicalRoom, Direction, DoorInfo, Result, Zone};

/// Identity a store gives a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageRoomId(pub u64);

impl fmt::Display for StorageRoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

/// Identity a store gives a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(pub u64);

impl ZoneId {
    /// Id reserved for rooms with no zone.
    pub const UNASSIGNED: Self = Self(0);
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone#{}", self.0)
    }
}

/// Where a reconstructed map is written.
///
/// Implementations must make both upserts idempotent: rooms by key, edges
/// by `(from, direction)`. Calling them again with the same data must not
/// create duplicates.
pub trait MapStore {
    /// Maps a zone assignment to the store's zone id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot resolve the zone.
    fn resolve_zone(&mut self, zone: &Zone) -> Result<ZoneId>;

    /// Inserts or updates a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the room.
    fn upsert_room(&mut self, room: &CanonicalRoom, zone: ZoneId) -> Result<StorageRoomId>;

    /// Inserts or updates an edge; `to` is `None` for a dangling exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the edge.
    fn upsert_edge(
        &mut self,
        from: StorageRoomId,
        direction: Direction,
        to: Option<StorageRoomId>,
        door: Option<&DoorInfo>,
    ) -> Result<()>;
}

impl<S: MapStore + ?Sized> MapStore for &mut S {
    fn resolve_zone(&mut self, zone: &Zone) -> Result<ZoneId> {
        (**self).resolve_zone(zone)
    }

    fn upsert_room(&mut self, room: &CanonicalRoom, zone: ZoneId) -> Result<StorageRoomId> {
        (**self).upsert_room(room, zone)
    }

    fn upsert_edge(
        &mut self,
        from: StorageRoomId,
        direction: Direction,
        to: Option<StorageRoomId>,
        door: Option<&DoorInfo>,
    ) -> Result<()> {
        (**self).upsert_edge(from, direction, to, door)
    }
}
