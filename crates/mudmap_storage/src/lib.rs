//! Storage for reconstructed mudmap maps.
//!
//! This crate provides:
//! - [`MapStore`] - The storage collaborator contract
//! - [`MemoryStore`] - Idempotent in-memory store built on persistent maps
//! - [`JsonFileStore`] - A [`MemoryStore`] saved to and loaded from a JSON file
//! - [`Persister`] - Upserts a whole map, recording per-entity failures

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod file;
pub mod memory;
pub mod persist;
pub mod store;

pub use file::JsonFileStore;
pub use memory::{MemoryStore, StoreSnapshot, StoredEdge, StoredRoom, StoredZone};
pub use persist::{PersistFailure, PersistSummary, Persister};
pub use store::{MapStore, StorageRoomId, ZoneId};
