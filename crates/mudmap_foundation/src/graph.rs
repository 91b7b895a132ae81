//! The reconstructed map: canonical rooms and the edges between them.

use crate::room::{CanonicalRoom, Edge, RoomKey};

/// Canonical rooms in first-seen order, each owning its outgoing exits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapGraph {
    rooms: Vec<CanonicalRoom>,
}

impl MapGraph {
    /// Creates a graph from rooms already in display order.
    #[must_use]
    pub fn new(rooms: Vec<CanonicalRoom>) -> Self {
        Self { rooms }
    }

    /// All rooms.
    #[must_use]
    pub fn rooms(&self) -> &[CanonicalRoom] {
        &self.rooms
    }

    /// Mutable access for the zone resolver.
    pub fn rooms_mut(&mut self) -> &mut [CanonicalRoom] {
        &mut self.rooms
    }

    /// Looks up a room by key.
    #[must_use]
    pub fn room(&self, key: &RoomKey) -> Option<&CanonicalRoom> {
        self.rooms.iter().find(|room| &room.key == key)
    }

    /// Every edge, grouped by room and then by direction.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.rooms.iter().flat_map(CanonicalRoom::edges)
    }

    /// Number of rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of edges, dangling ones included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.rooms.iter().map(|room| room.exits.len()).sum()
    }

    /// Number of edges with no known destination.
    #[must_use]
    pub fn dangling_count(&self) -> usize {
        self.rooms.iter().map(CanonicalRoom::dangling_exits).sum()
    }

    /// Returns true if no room was reconstructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
