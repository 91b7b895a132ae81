//! In-memory map store.
//!
//! Rooms, edges, and zones live in persistent ordered maps, so cloning a
//! store is cheap and a clone taken before a batch is an exact snapshot.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use mudmap_foundation::{CanonicalRoom, Direction, DoorInfo, Error, Result, RoomKey, Zone};

use crate::store::{MapStore, StorageRoomId, ZoneId};

/// A room as the store keeps it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRoom {
    /// Store-assigned id.
    pub id: StorageRoomId,
    /// Canonical room key.
    pub key: RoomKey,
    /// Display title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Creatures seen in the room.
    #[serde(default)]
    pub npcs: Vec<String>,
    /// Items seen in the room.
    #[serde(default)]
    pub items: Vec<String>,
    /// Zone the room belongs to.
    pub zone: ZoneId,
}

/// An edge as the store keeps it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEdge {
    /// Source room.
    pub from: StorageRoomId,
    /// Direction of travel.
    pub direction: Direction,
    /// Destination room, `None` when unresolved.
    pub to: Option<StorageRoomId>,
    /// Door metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door: Option<DoorInfo>,
}

/// A zone the store has resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredZone {
    /// Store-assigned id.
    pub id: ZoneId,
    /// The zone assignment it stands for.
    pub zone: Zone,
}

/// Flat, serializable form of a [`MemoryStore`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Rooms ordered by key.
    pub rooms: Vec<StoredRoom>,
    /// Edges ordered by source id and direction.
    pub edges: Vec<StoredEdge>,
    /// Zones ordered by assignment.
    pub zones: Vec<StoredZone>,
}

/// Idempotent in-memory [`MapStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    rooms: OrdMap<RoomKey, StoredRoom>,
    keys: OrdMap<StorageRoomId, RoomKey>,
    edges: OrdMap<(StorageRoomId, Direction), StoredEdge>,
    zones: OrdMap<Zone, ZoneId>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns a storage error if two rooms share an id or an edge refers
    /// to a room that is not in the snapshot.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Result<Self> {
        let mut store = Self::new();
        for room in snapshot.rooms {
            if store.keys.contains_key(&room.id) {
                return Err(Error::storage(format!("duplicate {} in snapshot", room.id)));
            }
            store.keys.insert(room.id, room.key.clone());
            store.rooms.insert(room.key.clone(), room);
        }
        for edge in snapshot.edges {
            store.check_room(edge.from)?;
            if let Some(to) = edge.to {
                store.check_room(to)?;
            }
            store.edges.insert((edge.from, edge.direction), edge);
        }
        for zone in snapshot.zones {
            store.zones.insert(zone.zone, zone.id);
        }
        Ok(store)
    }

    /// Flattens the store for serialization.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            rooms: self.rooms.values().cloned().collect(),
            edges: self.edges.values().cloned().collect(),
            zones: self
                .zones
                .iter()
                .map(|(zone, id)| StoredZone {
                    id: *id,
                    zone: zone.clone(),
                })
                .collect(),
        }
    }

    /// Looks up a room by key.
    #[must_use]
    pub fn room(&self, key: &RoomKey) -> Option<&StoredRoom> {
        self.rooms.get(key)
    }

    /// Looks up the edge leaving `from` in `direction`.
    #[must_use]
    pub fn edge(&self, from: StorageRoomId, direction: Direction) -> Option<&StoredEdge> {
        self.edges.get(&(from, direction))
    }

    /// Number of rooms stored.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of edges stored.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of zones resolved so far.
    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    fn check_room(&self, id: StorageRoomId) -> Result<()> {
        if self.keys.contains_key(&id) {
            Ok(())
        } else {
            Err(Error::storage(format!("unknown {id}")))
        }
    }

    fn next_room_id(&self) -> StorageRoomId {
        StorageRoomId(self.keys.get_max().map_or(1, |(id, _)| id.0 + 1))
    }

    fn next_zone_id(&self) -> ZoneId {
        let max = self.zones.values().map(|id| id.0).max().unwrap_or(0);
        ZoneId(max + 1)
    }
}

impl MapStore for MemoryStore {
    fn resolve_zone(&mut self, zone: &Zone) -> Result<ZoneId> {
        if let Some(id) = self.zones.get(zone) {
            return Ok(*id);
        }
        let id = match zone {
            Zone::Unassigned => ZoneId::UNASSIGNED,
            Zone::Explicit(id) => {
                let id = ZoneId(*id);
                if id == ZoneId::UNASSIGNED || self.zones.values().any(|known| *known == id) {
                    return Err(Error::storage(format!(
                        "explicit zone {} collides with an existing zone",
                        id.0
                    )));
                }
                id
            }
            Zone::Named(_) => self.next_zone_id(),
        };
        self.zones.insert(zone.clone(), id);
        Ok(id)
    }

    fn upsert_room(&mut self, room: &CanonicalRoom, zone: ZoneId) -> Result<StorageRoomId> {
        let id = self
            .rooms
            .get(&room.key)
            .map_or_else(|| self.next_room_id(), |existing| existing.id);
        self.keys.insert(id, room.key.clone());
        self.rooms.insert(
            room.key.clone(),
            StoredRoom {
                id,
                key: room.key.clone(),
                title: room.title.clone(),
                description: room.description.clone(),
                npcs: room.npcs.clone(),
                items: room.items.clone(),
                zone,
            },
        );
        Ok(id)
    }

    fn upsert_edge(
        &mut self,
        from: StorageRoomId,
        direction: Direction,
        to: Option<StorageRoomId>,
        door: Option<&DoorInfo>,
    ) -> Result<()> {
        self.check_room(from)?;
        if let Some(to) = to {
            self.check_room(to)?;
        }
        self.edges.insert(
            (from, direction),
            StoredEdge {
                from,
                direction,
                to,
                door: door.cloned(),
            },
        );
        Ok(())
    }
}
