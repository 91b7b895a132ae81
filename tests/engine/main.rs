//! Integration tests for the mudmap_engine crate.
//!
//! Tests for turning observations into a map:
//! - Movement correlation and dropped moves
//! - Room deduplication and key disambiguation
//! - Zone resolution

mod correlation_tests;
mod dedup_tests;
mod zone_tests;
