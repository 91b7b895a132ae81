//! The export document and its JSON and `MessagePack` encodings.
//!
//! ```text
//! { "rooms": [ { "key", "title", "description", "npcs", "items", "zone" } ],
//!   "edges": [ { "from", "direction", "to", "isDoor", "doorName", "isLocked" } ] }
//! ```
//!
//! `to` is `null` for a dangling exit. Importing a document gives back the
//! graph it was exported from, minus visit counts and zone hints, so
//! exporting an imported document reproduces it exactly.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use mudmap_foundation::{
    CanonicalRoom, Direction, DoorInfo, Error, Exit, MapGraph, Result, RoomKey, Zone,
};

/// One room of the export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRoom {
    /// Room key.
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
    /// Zone id, zone name, or `"unassigned"`.
    pub zone: Zone,
}

/// One edge of the export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEdge {
    /// Source room key.
    pub from: RoomKey,
    /// Direction of travel.
    pub direction: Direction,
    /// Destination room key, `null` when unresolved.
    pub to: Option<RoomKey>,
    /// Whether a door bars the exit.
    pub is_door: bool,
    /// Name of the door, if any.
    pub door_name: Option<String>,
    /// Whether the door was seen locked.
    pub is_locked: bool,
}

/// A whole map, ready to write.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Rooms in graph order.
    pub rooms: Vec<ExportRoom>,
    /// Edges grouped by room, then in canonical direction order.
    pub edges: Vec<ExportEdge>,
}

/// Encoding of an export file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON.
    Json,
    /// `MessagePack` with named fields.
    MessagePack,
}

impl ExportFormat {
    /// Picks the format from a file extension: `.msgpack` and `.mpk` are
    /// `MessagePack`, anything else is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("msgpack") || ext.eq_ignore_ascii_case("mpk") => {
                Self::MessagePack
            }
            _ => Self::Json,
        }
    }
}

impl ExportDocument {
    /// Builds the document for a graph.
    #[must_use]
    pub fn from_graph(graph: &MapGraph) -> Self {
        let rooms = graph
            .rooms()
            .iter()
            .map(|room| ExportRoom {
                key: room.key.clone(),
                title: room.title.clone(),
                description: room.description.clone(),
                npcs: room.npcs.clone(),
                items: room.items.clone(),
                zone: room.zone.clone(),
            })
            .collect();
        let edges = graph
            .edges()
            .map(|edge| ExportEdge {
                from: edge.from,
                direction: edge.direction,
                to: edge.to,
                is_door: edge.door.is_some(),
                is_locked: edge.door.as_ref().is_some_and(|door| door.locked),
                door_name: edge.door.map(|door| door.name),
            })
            .collect();
        Self { rooms, edges }
    }

    /// Rebuilds the graph.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if two rooms share a key, an edge
    /// names a room that is not in the document, or a room has two edges in
    /// the same direction.
    pub fn into_graph(self) -> Result<MapGraph> {
        let mut rooms: Vec<CanonicalRoom> = Vec::with_capacity(self.rooms.len());
        let mut index: BTreeMap<RoomKey, usize> = BTreeMap::new();

        for (pos, room) in self.rooms.into_iter().enumerate() {
            if index.insert(room.key.clone(), pos).is_some() {
                return Err(Error::serialization(format!("duplicate room '{}'", room.key)));
            }
            rooms.push(CanonicalRoom {
                key: room.key,
                title: room.title,
                description: room.description,
                npcs: room.npcs,
                items: room.items,
                visits: 1,
                first_seen: pos,
                zone_hint: None,
                zone: room.zone,
                exits: BTreeMap::new(),
            });
        }

        for edge in self.edges {
            let Some(&from) = index.get(&edge.from) else {
                return Err(Error::serialization(format!(
                    "edge leaves unknown room '{}'",
                    edge.from
                )));
            };
            if let Some(to) = &edge.to {
                if !index.contains_key(to) {
                    return Err(Error::serialization(format!(
                        "edge from '{}' leads to unknown room '{to}'",
                        edge.from
                    )));
                }
            }
            let door = edge.is_door.then(|| DoorInfo {
                name: edge.door_name.unwrap_or_else(|| "door".to_string()),
                locked: edge.is_locked,
            });
            match rooms[from].exits.entry(edge.direction) {
                Entry::Vacant(slot) => {
                    slot.insert(Exit { to: edge.to, door });
                }
                Entry::Occupied(_) => {
                    return Err(Error::serialization(format!(
                        "room '{}' has two {} edges",
                        edge.from, edge.direction
                    )));
                }
            }
        }

        Ok(MapGraph::new(rooms))
    }

    /// Encodes the document.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails.
    pub fn to_bytes(&self, format: ExportFormat) -> Result<Vec<u8>> {
        match format {
            ExportFormat::Json => serde_json::to_vec_pretty(self).map_err(Error::serialization),
            ExportFormat::MessagePack => rmp_serde::to_vec_named(self).map_err(Error::serialization),
        }
    }

    /// Decodes a document.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the bytes are not a document.
    pub fn from_bytes(bytes: &[u8], format: ExportFormat) -> Result<Self> {
        match format {
            ExportFormat::Json => serde_json::from_slice(bytes).map_err(Error::serialization),
            ExportFormat::MessagePack => rmp_serde::from_slice(bytes).map_err(Error::serialization),
        }
    }

    /// Writes the document, choosing the format from the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes(ExportFormat::from_path(path))?;
        fs::write(path, bytes).map_err(|e| Error::io("write export", path, &e))?;
        tracing::debug!(
            path = %path.display(),
            rooms = self.rooms.len(),
            edges = self.edges.len(),
            "wrote export"
        );
        Ok(())
    }

    /// Reads a document, choosing the format from the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| Error::io("read export", path, &e))?;
        Self::from_bytes(&bytes, ExportFormat::from_path(path))
    }
}
