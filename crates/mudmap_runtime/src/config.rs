//! Run configuration.

use std::path::PathBuf;

use mudmap_foundation::{Error, ParseConfig, Result};

/// Default store file used when none is given.
pub const DEFAULT_STORE: &str = "mudmap-store.json";

/// Everything one run of the tool needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Transcript to read.
    pub transcript: PathBuf,
    /// Where to write the export, if anywhere.
    pub export: Option<PathBuf>,
    /// Skip the storage collaborator entirely.
    pub dry_run: bool,
    /// File-backed store to persist into.
    pub store: PathBuf,
    /// Parser heuristics and the zone override.
    pub parse: ParseConfig,
}

impl RunConfig {
    /// Creates a configuration for `transcript` with default settings.
    #[must_use]
    pub fn new(transcript: impl Into<PathBuf>) -> Self {
        Self {
            transcript: transcript.into(),
            export: None,
            dry_run: false,
            store: PathBuf::from(DEFAULT_STORE),
            parse: ParseConfig::default(),
        }
    }

    /// Builder method to write an export.
    #[must_use]
    pub fn with_export(mut self, path: Option<PathBuf>) -> Self {
        self.export = path;
        self
    }

    /// Builder method to skip persistence.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Builder method to set the store file.
    #[must_use]
    pub fn with_store(mut self, path: impl Into<PathBuf>) -> Self {
        self.store = path.into();
        self
    }

    /// Builder method to assign every room to one zone.
    #[must_use]
    pub fn with_zone_id(mut self, zone: Option<u64>) -> Self {
        self.parse = self.parse.with_zone_override(zone);
        self
    }

    /// Checks the configuration before any work is done.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for zone id 0, which the store keeps
    /// for unassigned rooms.
    pub fn validate(&self) -> Result<()> {
        if self.parse.zone_override == Some(0) {
            return Err(Error::config("zone id 0 is reserved for unassigned rooms"));
        }
        Ok(())
    }
}
