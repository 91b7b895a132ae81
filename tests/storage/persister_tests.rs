//! Persister tests over maps built from transcripts.

use mudmap_engine::Pipeline;
use mudmap_foundation::{
    CanonicalRoom, Direction, DoorInfo, Error, MapGraph, ParseContext, Result, RoomKey, Zone,
};
use mudmap_storage::{MapStore, MemoryStore, Persister, StorageRoomId, ZoneId};

const VILLAGE: &str = "\
[Zone: Village]
Village Green
A wide green with a well in the middle.
Exits: north east(gate)
north
Chapel
A small stone chapel.
Exits: south
south
Village Green
A wide green with a well in the middle.
Exits: north east(gate)
";

fn village() -> MapGraph {
    let mut ctx = ParseContext::default();
    Pipeline::new().run(VILLAGE, &mut ctx).graph
}

#[test]
fn whole_map_is_saved() {
    let mut store = MemoryStore::new();
    let summary = Persister::new(&mut store).persist(&village());

    assert!(summary.is_clean());
    assert_eq!(summary.rooms_saved, 2);
    assert_eq!(summary.edges_saved, 3);

    let green = store.room(&RoomKey::new("village-green")).unwrap();
    let chapel = store.room(&RoomKey::new("chapel")).unwrap();
    assert_eq!(green.zone, chapel.zone);
    assert_ne!(green.zone, ZoneId::UNASSIGNED);

    let gate = store.edge(green.id, Direction::East).unwrap();
    assert_eq!(gate.to, None);
    assert_eq!(gate.door, Some(DoorInfo::new("gate")));
    assert_eq!(
        store.edge(green.id, Direction::North).unwrap().to,
        Some(chapel.id)
    );
}

#[test]
fn repeated_runs_are_idempotent() {
    let mut store = MemoryStore::new();
    for _ in 0..3 {
        Persister::new(&mut store).persist(&village());
    }
    assert_eq!(store.room_count(), 2);
    assert_eq!(store.edge_count(), 3);
    assert_eq!(store.zone_count(), 1);
}

/// Rejects every edge leaving one room.
struct RejectEdgesFrom {
    inner: MemoryStore,
    key: RoomKey,
    blocked: Option<StorageRoomId>,
}

impl MapStore for RejectEdgesFrom {
    fn resolve_zone(&mut self, zone: &Zone) -> Result<ZoneId> {
        self.inner.resolve_zone(zone)
    }

    fn upsert_room(&mut self, room: &CanonicalRoom, zone: ZoneId) -> Result<StorageRoomId> {
        let id = self.inner.upsert_room(room, zone)?;
        if room.key == self.key {
            self.blocked = Some(id);
        }
        Ok(id)
    }

    fn upsert_edge(
        &mut self,
        from: StorageRoomId,
        direction: Direction,
        to: Option<StorageRoomId>,
        door: Option<&DoorInfo>,
    ) -> Result<()> {
        if Some(from) == self.blocked {
            return Err(Error::storage("read-only room"));
        }
        self.inner.upsert_edge(from, direction, to, door)
    }
}

#[test]
fn edge_failures_are_counted_and_skipped() {
    let store = RejectEdgesFrom {
        inner: MemoryStore::new(),
        key: RoomKey::new("village-green"),
        blocked: None,
    };
    let mut persister = Persister::new(store);
    let summary = persister.persist(&village());

    assert_eq!(summary.rooms_saved, 2);
    assert_eq!(summary.edges_failed, 2);
    assert_eq!(summary.edges_saved, 1);
    assert_eq!(summary.failures.len(), 2);
    assert!(summary.failures[0].entity.starts_with("village-green --north-->"));

    let store = persister.into_inner().inner;
    assert_eq!(store.edge_count(), 1);
}
