//! mudmap - Room map reconstruction from MUD transcripts
//!
//! This crate re-exports all layers of the mudmap system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: mudmap_runtime    — Export/import, run configuration, CLI
//! Layer 2: mudmap_engine     — Correlation, deduplication, zones, pipeline
//!          mudmap_storage    — Storage collaborator, persister, file store
//! Layer 1: mudmap_parser     — Segmenter, line matchers, room extractor
//! Layer 0: mudmap_foundation — Directions, data model, diagnostics, errors
//! ```

pub use mudmap_engine as engine;
pub use mudmap_foundation as foundation;
pub use mudmap_parser as parser;
pub use mudmap_runtime as runtime;
pub use mudmap_storage as storage;
