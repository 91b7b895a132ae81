//! Export, run configuration, and the command line for mudmap.
//!
//! This crate provides:
//! - [`ExportDocument`] - The JSON/MessagePack map document, export and import
//! - [`RunConfig`] - Everything one run needs, built from the command line
//! - [`run`] - Reads a transcript, rebuilds the map, exports and persists it

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod export;
pub mod run;

pub use config::RunConfig;
pub use export::{ExportDocument, ExportEdge, ExportFormat, ExportRoom};
pub use run::{RunReport, read_transcript, run};
