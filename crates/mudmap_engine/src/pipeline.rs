//! The in-memory stages, run in order.

use mudmap_foundation::{MapGraph, ObservedRoom, ParseContext, RawBlock};
use mudmap_parser::Segmenter;

use crate::correlator::{Correlator, Traversal};
use crate::dedup::Deduplicator;
use crate::zone::ZoneResolver;

/// Everything the in-memory stages produced for one transcript.
#[derive(Clone, Debug, Default)]
pub struct ParseOutcome {
    /// Segmented blocks.
    pub blocks: Vec<RawBlock>,
    /// Extracted observations.
    pub observations: Vec<ObservedRoom>,
    /// Correlated moves between observations.
    pub traversals: Vec<Traversal>,
    /// Deduplicated, zoned map.
    pub graph: MapGraph,
}

/// Segmenter, correlator, deduplicator, and zone resolver in one value.
///
/// # Example
///
/// ```
/// use mudmap_engine::Pipeline;
/// use mudmap_foundation::ParseContext;
///
/// let transcript = "\
/// The Temple of Midgaard
/// You are in the southern end of the temple hall.
/// Exits: north
/// north
/// Temple Square
/// You are standing on the temple square.
/// Exits: south
/// ";
///
/// let mut ctx = ParseContext::default();
/// let outcome = Pipeline::new().run(transcript, &mut ctx);
/// assert_eq!(outcome.graph.room_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Pipeline {
    segmenter: Segmenter,
    correlator: Correlator,
    deduplicator: Deduplicator,
    zones: ZoneResolver,
}

impl Pipeline {
    /// Creates a pipeline with the standard line matchers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pipeline around a custom segmenter.
    #[must_use]
    pub fn with_segmenter(segmenter: Segmenter) -> Self {
        Self {
            segmenter,
            ..Self::default()
        }
    }

    /// Runs every in-memory stage. Recoverable problems end up in
    /// `ctx.diagnostics`; nothing here fails.
    #[must_use]
    pub fn run(&self, transcript: &str, ctx: &mut ParseContext) -> ParseOutcome {
        let blocks = self.segmenter.segment(transcript, ctx);
        let correlation = self.correlator.correlate(&blocks, ctx);
        let mut graph = self.deduplicator.deduplicate(&correlation, ctx);
        self.zones.resolve(&mut graph, ctx);

        tracing::info!(
            blocks = blocks.len(),
            rooms = graph.room_count(),
            edges = graph.edge_count(),
            warnings = ctx.diagnostics.len(),
            "parsed transcript"
        );

        ParseOutcome {
            blocks,
            observations: correlation.observations,
            traversals: correlation.traversals,
            graph,
        }
    }
}
