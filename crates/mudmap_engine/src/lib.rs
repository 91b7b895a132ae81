//! Movement correlation, room deduplication, and zone resolution for mudmap.
//!
//! This crate provides:
//! - [`Correlator`] - Ties movement commands to the rooms they lead to
//! - [`Deduplicator`] - Merges revisits into canonical rooms with edges
//! - [`ZoneResolver`] - Assigns every room to a zone
//! - [`Pipeline`] - Runs segmentation through zone resolution in one call

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod correlator;
pub mod dedup;
pub mod pipeline;
pub mod zone;

pub use correlator::{Correlation, Correlator, DropReason, Traversal};
pub use dedup::Deduplicator;
pub use pipeline::{ParseOutcome, Pipeline};
pub use zone::ZoneResolver;
