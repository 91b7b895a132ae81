//! Directions, map data model, diagnostics, and errors for mudmap.
//!
//! This crate provides:
//! - [`Direction`] - The ten canonical movement directions and their table
//! - [`RawBlock`] - Line-numbered transcript fragments produced by segmentation
//! - [`ObservedRoom`], [`CanonicalRoom`], [`Edge`] - The map data model
//! - [`MapGraph`] - Canonical rooms and their edges
//! - [`Zone`] - Zone assignment, including the `unassigned` sentinel
//! - [`ParseContext`] - Configuration and warning sink passed to every stage
//! - [`Error`] - Fatal error type with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod block;
pub mod context;
pub mod diagnostics;
pub mod direction;
pub mod error;
pub mod graph;
pub mod room;

pub use block::{CommandBlock, LineRange, ObservationBlock, RawBlock, SourceLine};
pub use context::{ParseConfig, ParseContext};
pub use diagnostics::{Diagnostics, Warning, WarningKind};
pub use direction::Direction;
pub use error::{Error, ErrorContext, ErrorKind};
pub use graph::MapGraph;
pub use room::{
    CanonicalRoom, DoorInfo, Edge, Exit, ExitToken, MentionKind, MovementEvent, ObservationId,
    ObservedRoom, RoomKey, Zone,
};

/// Result type alias using the mudmap [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
