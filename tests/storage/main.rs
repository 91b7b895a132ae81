//! Integration tests for the mudmap_storage crate.
//!
//! Tests for writing maps through the storage collaborator:
//! - Idempotent upserts across repeated runs
//! - Per-entity failures that do not stop a batch
//! - The JSON file store

mod file_store_tests;
mod persister_tests;
