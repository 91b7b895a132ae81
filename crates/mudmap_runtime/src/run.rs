//! One run: transcript in, map out.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use mudmap_engine::Pipeline;
use mudmap_foundation::{Error, MapGraph, ParseContext, Result, WarningKind};
use mudmap_storage::{JsonFileStore, PersistSummary, Persister};

use crate::config::RunConfig;
use crate::export::ExportDocument;

/// What a run did, for the end-of-run summary.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// The reconstructed map.
    pub graph: MapGraph,
    /// Warning counts by stage.
    pub warnings: BTreeMap<WarningKind, usize>,
    /// Persistence counts; `None` on a dry run.
    pub persist: Option<PersistSummary>,
}

impl RunReport {
    /// Total number of warnings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings.values().sum()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rooms:    {}", self.graph.room_count())?;
        writeln!(
            f,
            "edges:    {} ({} dangling)",
            self.graph.edge_count(),
            self.graph.dangling_count()
        )?;
        write!(f, "warnings: {}", self.warning_count())?;
        if !self.warnings.is_empty() {
            let parts: Vec<String> = self
                .warnings
                .iter()
                .map(|(kind, count)| format!("{kind} {count}"))
                .collect();
            write!(f, " ({})", parts.join(", "))?;
        }
        writeln!(f)?;
        match &self.persist {
            Some(summary) => write!(f, "stored:   {summary}"),
            None => write!(f, "stored:   skipped (dry run)"),
        }
    }
}

/// Reads a transcript, replacing invalid UTF-8.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read and an
/// empty-transcript error if it holds nothing but whitespace.
pub fn read_transcript(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io("read transcript", path, &e))?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    if text.trim().is_empty() {
        return Err(Error::empty_transcript(path.display().to_string()));
    }
    Ok(text)
}

/// Runs the whole tool for one configuration.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the transcript is
/// unreadable or empty, the export cannot be written, or the store file
/// cannot be opened or saved. Warnings and per-entity storage failures are
/// reported, not returned as errors.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    config.validate()?;
    let transcript = read_transcript(&config.transcript)?;
    tracing::info!(path = %config.transcript.display(), bytes = transcript.len(), "read transcript");

    let mut ctx = ParseContext::new(config.parse.clone());
    let outcome = Pipeline::new().run(&transcript, &mut ctx);

    if let Some(path) = &config.export {
        ExportDocument::from_graph(&outcome.graph).save(path)?;
        tracing::info!(path = %path.display(), "exported map");
    }

    let persist = if config.dry_run {
        tracing::info!("dry run, skipping storage");
        None
    } else {
        let mut store = JsonFileStore::open(&config.store)?;
        let summary = Persister::new(&mut store).persist(&outcome.graph);
        store.save()?;
        Some(summary)
    };

    let mut warnings = BTreeMap::new();
    for warning in ctx.diagnostics.warnings() {
        *warnings.entry(warning.kind).or_insert(0) += 1;
    }

    Ok(RunReport {
        graph: outcome.graph,
        warnings,
        persist,
    })
}
