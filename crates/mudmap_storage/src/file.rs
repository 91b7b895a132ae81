//! A [`MemoryStore`] kept in a JSON file between runs.

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use mudmap_foundation::{
    CanonicalRoom, Direction, DoorInfo, Error, ErrorContext, Result, Zone,
};

use crate::memory::{MemoryStore, StoreSnapshot};
use crate::store::{MapStore, StorageRoomId, ZoneId};

/// Current store file version.
const STORE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    #[serde(flatten)]
    snapshot: StoreSnapshot,
}

/// File-backed map store.
///
/// Upserts go to memory; [`JsonFileStore::save`] writes the whole store.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    store: MemoryStore,
}

impl JsonFileStore {
    /// Opens the store at `path`, starting empty if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, is not a
    /// store file, or has an unsupported version.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let store = match fs::read_to_string(&path) {
            Ok(content) => parse(&content).map_err(|e| {
                e.with_context(ErrorContext::new().with_source(path.display().to_string()))
            })?,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "starting a new store");
                MemoryStore::new()
            }
            Err(e) => return Err(Error::io("read store", &path, &e)),
        };
        tracing::debug!(
            path = %path.display(),
            rooms = store.room_count(),
            edges = store.edge_count(),
            "opened store"
        );
        Ok(Self { path, store })
    }

    /// Writes the store to its file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let file = StoreFile {
            version: STORE_VERSION,
            snapshot: self.store.snapshot(),
        };
        let content = serde_json::to_string_pretty(&file).map_err(Error::serialization)?;
        fs::write(&self.path, content).map_err(|e| Error::io("write store", &self.path, &e))?;
        tracing::debug!(path = %self.path.display(), "saved store");
        Ok(())
    }

    /// Path of the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The in-memory contents.
    #[must_use]
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }
}

fn parse(content: &str) -> Result<MemoryStore> {
    let file: StoreFile = serde_json::from_str(content).map_err(Error::serialization)?;
    if file.version != STORE_VERSION {
        return Err(Error::serialization(format!(
            "unsupported store version {}, expected {STORE_VERSION}",
            file.version
        )));
    }
    MemoryStore::from_snapshot(file.snapshot)
}

impl MapStore for JsonFileStore {
    fn resolve_zone(&mut self, zone: &Zone) -> Result<ZoneId> {
        self.store.resolve_zone(zone)
    }

    fn upsert_room(&mut self, room: &CanonicalRoom, zone: ZoneId) -> Result<StorageRoomId> {
        self.store.upsert_room(room, zone)
    }

    fn upsert_edge(
        &mut self,
        from: StorageRoomId,
        direction: Direction,
        to: Option<StorageRoomId>,
        door: Option<&DoorInfo>,
    ) -> Result<()> {
        self.store.upsert_edge(from, direction, to, door)
    }
}
