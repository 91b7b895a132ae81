//! Integration tests for the mudmap_parser crate.
//!
//! Tests for turning transcript text into room observations:
//! - Direction normalization
//! - Segmentation into observation and command blocks
//! - Room extraction (titles, descriptions, exits, doors, mentions)

mod segmentation_tests;
