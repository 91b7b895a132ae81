//! Transcript segmentation and room extraction for mudmap.
//!
//! This crate turns raw session text into room observations:
//!
//! ```text
//! "The Temple of Midgaard\nYou are in...\nExits: north, south(door)\nnorth\n..."
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LINE MATCHERS   │  → [Title, Text, Text, Movement(north), Title, ...]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SEGMENTER       │  → [Observation, Command, Observation]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ EXTRACTOR       │  → ObservedRoom { title, body_text, exits, npcs, items }
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`matcher`] - Prioritized line classifiers
//! - [`segmenter`] - Splits a transcript into blocks
//! - [`extractor`] - Parses an observation block into a room
//! - [`exits`] - Exit line recognition and door markers
//! - [`tokenizer`] - Splits exit lists into tokens
//! - [`mention`] - NPC and item mention lines
//! - [`command`] - Prompt stripping and command recognition

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod exits;
pub mod extractor;
pub mod matcher;
pub mod mention;
pub mod segmenter;
pub mod tokenizer;

pub use command::{is_failure_message, movement_of};
pub use extractor::{ExtractFailure, extract};
pub use matcher::{LineClass, LineCursor, LineMatcher, MatcherSet};
pub use segmenter::Segmenter;
