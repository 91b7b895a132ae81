//! Writes a reconstructed map through a [`MapStore`].
//!
//! Rooms go first, then edges. A failed call is recorded and the batch
//! moves on; an edge whose source or destination room failed is counted as
//! failed without calling the store.

use std::collections::HashMap;
use std::fmt;

use mudmap_foundation::{MapGraph, RoomKey};

use crate::store::{MapStore, StorageRoomId};

/// One entity the store did not accept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistFailure {
    /// Room key or `key --direction-->` label of the entity.
    pub entity: String,
    /// Why it failed.
    pub reason: String,
}

impl fmt::Display for PersistFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.entity, self.reason)
    }
}

/// Saved and failed counts for one batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersistSummary {
    /// Rooms the store accepted.
    pub rooms_saved: usize,
    /// Rooms the store rejected.
    pub rooms_failed: usize,
    /// Edges the store accepted.
    pub edges_saved: usize,
    /// Edges rejected or skipped because an endpoint failed.
    pub edges_failed: usize,
    /// Details of every failure, in the order they happened.
    pub failures: Vec<PersistFailure>,
}

impl PersistSummary {
    /// Returns true if nothing failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rooms_failed == 0 && self.edges_failed == 0
    }

    fn fail(&mut self, entity: String, reason: String) {
        tracing::warn!(%entity, %reason, "store rejected entity");
        self.failures.push(PersistFailure { entity, reason });
    }
}

impl fmt::Display for PersistSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rooms: {} saved, {} failed; edges: {} saved, {} failed",
            self.rooms_saved, self.rooms_failed, self.edges_saved, self.edges_failed
        )
    }
}

/// Upserts a map into a store.
#[derive(Debug)]
pub struct Persister<S> {
    store: S,
}

impl<S: MapStore> Persister<S> {
    /// Wraps a store. Pass `&mut store` to keep using it afterwards.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Gives the store back.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Upserts every room, then every edge.
    pub fn persist(&mut self, graph: &MapGraph) -> PersistSummary {
        let mut summary = PersistSummary::default();
        let mut ids: HashMap<&RoomKey, StorageRoomId> = HashMap::new();

        for room in graph.rooms() {
            let saved = self
                .store
                .resolve_zone(&room.zone)
                .and_then(|zone| self.store.upsert_room(room, zone));
            match saved {
                Ok(id) => {
                    ids.insert(&room.key, id);
                    summary.rooms_saved += 1;
                }
                Err(e) => {
                    summary.rooms_failed += 1;
                    summary.fail(room.key.to_string(), e.to_string());
                }
            }
        }

        for room in graph.rooms() {
            for (direction, exit) in &room.exits {
                let label = format!("{} --{direction}-->", room.key);
                let Some(&from) = ids.get(&room.key) else {
                    summary.edges_failed += 1;
                    summary.fail(label, "source room was not saved".to_string());
                    continue;
                };
                let to = match &exit.to {
                    None => None,
                    Some(key) => match ids.get(key) {
                        Some(&id) => Some(id),
                        None => {
                            summary.edges_failed += 1;
                            summary.fail(label, format!("destination room '{key}' was not saved"));
                            continue;
                        }
                    },
                };
                match self
                    .store
                    .upsert_edge(from, *direction, to, exit.door.as_ref())
                {
                    Ok(()) => summary.edges_saved += 1,
                    Err(e) => {
                        summary.edges_failed += 1;
                        summary.fail(label, e.to_string());
                    }
                }
            }
        }

        tracing::info!(
            rooms_saved = summary.rooms_saved,
            rooms_failed = summary.rooms_failed,
            edges_saved = summary.edges_saved,
            edges_failed = summary.edges_failed,
            "persisted map"
        );
        summary
    }
}
