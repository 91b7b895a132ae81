//! Movement correlation.
//!
//! Walks the block sequence with a "current room" cursor and turns each
//! movement command into a traversal from the room the player stood in to
//! the room printed right after the command. Narration printed on the way
//! ("You follow the road north.") is tolerated, but a move the game refused
//! is dropped; the correlator never guesses a destination.

use thiserror::Error;

use mudmap_foundation::{
    Direction, ObservationId, ObservedRoom, ParseContext, RawBlock, WarningKind,
};
use mudmap_parser::{extract, is_failure_message, movement_of};

/// A move from one observation to the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Traversal {
    /// Observation the player left.
    pub from: ObservationId,
    /// Direction moved.
    pub direction: Direction,
    /// Observation printed after the move.
    pub to: ObservationId,
    /// Index of the movement command block.
    pub command_block: usize,
}

/// Why a movement command produced no traversal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DropReason {
    /// The game refused the move.
    #[error("move {direction} answered with \"{response}\" instead of a room")]
    Response {
        /// Direction attempted.
        direction: Direction,
        /// The refusal line.
        response: String,
    },
    /// Another command followed before any room.
    #[error("move {0} was followed by another command, not a room")]
    NextNotObservation(Direction),
    /// The transcript ended after the command.
    #[error("move {0} is the last thing in the transcript")]
    EndOfTranscript(Direction),
    /// The next room could not be extracted.
    #[error("move {0} led to a room that could not be read")]
    Unreadable(Direction),
    /// The room the player started from is unknown.
    #[error("move {0} started from an unknown room")]
    NoOrigin(Direction),
}

/// Correlator output: the observations it extracted and the moves between
/// them.
#[derive(Clone, Debug, Default)]
pub struct Correlation {
    /// Successfully extracted observations, in transcript order.
    pub observations: Vec<ObservedRoom>,
    /// Recorded traversals, in transcript order.
    pub traversals: Vec<Traversal>,
    /// Indices into `traversals` of moves undone by a later opposite move.
    pub pairs: Vec<(usize, usize)>,
}

impl Correlation {
    /// Looks up an observation.
    ///
    /// # Panics
    ///
    /// Panics if the id did not come from this correlation.
    #[must_use]
    pub fn observation(&self, id: ObservationId) -> &ObservedRoom {
        &self.observations[id.0]
    }
}

/// Movement correlator.
#[derive(Debug, Default)]
pub struct Correlator;

impl Correlator {
    /// Creates a correlator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extracts every observation and links them through movement commands.
    #[must_use]
    pub fn correlate(&self, blocks: &[RawBlock], ctx: &mut ParseContext) -> Correlation {
        let mut correlation = Correlation::default();
        let ids = extract_all(blocks, &mut correlation, ctx);

        let mut cursor: Option<ObservationId> = None;
        for (pos, block) in blocks.iter().enumerate() {
            let cmd = match block {
                RawBlock::Observation(_) => {
                    cursor = ids[pos];
                    continue;
                }
                RawBlock::Command(cmd) => cmd,
            };
            let Some(event) = movement_of(cmd) else {
                continue;
            };

            match destination(blocks, &ids, pos, cursor, event.direction) {
                Ok((from, to)) => correlation.traversals.push(Traversal {
                    from,
                    direction: event.direction,
                    to,
                    command_block: event.source_block_index,
                }),
                Err(reason) => {
                    ctx.diagnostics
                        .warn(WarningKind::Correlation, Some(block.lines()), reason.to_string());
                }
            }
        }

        correlation.pairs = find_pairs(&correlation);
        tracing::debug!(
            observations = correlation.observations.len(),
            traversals = correlation.traversals.len(),
            pairs = correlation.pairs.len(),
            "correlated movements"
        );
        correlation
    }
}

/// Extracts each observation block once, warning on failures.
fn extract_all(
    blocks: &[RawBlock],
    correlation: &mut Correlation,
    ctx: &mut ParseContext,
) -> Vec<Option<ObservationId>> {
    blocks
        .iter()
        .map(|block| {
            let obs = block.as_observation()?;
            match extract(obs) {
                Ok(room) => {
                    correlation.observations.push(room);
                    Some(ObservationId(correlation.observations.len() - 1))
                }
                Err(failure) => {
                    ctx.diagnostics.warn(
                        WarningKind::Extraction,
                        Some(block.lines()),
                        format!("skipped block: {failure}"),
                    );
                    None
                }
            }
        })
        .collect()
}

fn destination(
    blocks: &[RawBlock],
    ids: &[Option<ObservationId>],
    pos: usize,
    cursor: Option<ObservationId>,
    direction: Direction,
) -> Result<(ObservationId, ObservationId), DropReason> {
    if let Some(RawBlock::Command(cmd)) = blocks.get(pos) {
        if let Some(refusal) = cmd.response.iter().find(|l| is_failure_message(&l.text)) {
            return Err(DropReason::Response {
                direction,
                response: refusal.text.trim().to_string(),
            });
        }
    }
    let to = match blocks.get(pos + 1) {
        None => return Err(DropReason::EndOfTranscript(direction)),
        Some(RawBlock::Command(_)) => return Err(DropReason::NextNotObservation(direction)),
        Some(RawBlock::Observation(_)) => ids[pos + 1].ok_or(DropReason::Unreadable(direction))?,
    };
    let from = cursor.ok_or(DropReason::NoOrigin(direction))?;
    Ok((from, to))
}

/// Pairs each traversal with the latest earlier unpaired move it undoes.
fn find_pairs(correlation: &Correlation) -> Vec<(usize, usize)> {
    let traversals = &correlation.traversals;
    let mut paired = vec![false; traversals.len()];
    let mut pairs = Vec::new();

    for (j, back) in traversals.iter().enumerate() {
        let found = (0..j).rev().find(|&i| {
            let out = &traversals[i];
            !paired[i]
                && back.direction == out.direction.opposite()
                && (back.from == out.to
                    || correlation
                        .observation(back.from)
                        .same_text(correlation.observation(out.to)))
        });
        if let Some(i) = found {
            paired[i] = true;
            paired[j] = true;
            pairs.push((i, j));
        }
    }
    pairs
}
