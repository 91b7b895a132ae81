//! Splits a transcript into observation and command blocks.

use mudmap_foundation::{
    CommandBlock, ObservationBlock, ParseConfig, ParseContext, RawBlock, SourceLine,
};

use crate::exits::is_exit_line;
use crate::matcher::{LineClass, LineCursor, MatcherSet};

/// The block currently being filled.
enum Open {
    Observation {
        block: ObservationBlock,
        awaiting_exits: bool,
    },
    Command(CommandBlock),
}

/// Transcript segmenter driven by a [`MatcherSet`].
#[derive(Debug, Default)]
pub struct Segmenter {
    matchers: MatcherSet,
}

impl Segmenter {
    /// Creates a segmenter with the standard matchers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a segmenter with a custom matcher set.
    #[must_use]
    pub fn with_matchers(matchers: MatcherSet) -> Self {
        Self { matchers }
    }

    /// Segments a whole transcript.
    ///
    /// Returns an empty list when no observation is found; that is a valid
    /// (empty) result, not an error.
    #[must_use]
    pub fn segment(&self, transcript: &str, ctx: &mut ParseContext) -> Vec<RawBlock> {
        let lines: Vec<SourceLine> = transcript
            .lines()
            .enumerate()
            .map(|(i, text)| SourceLine::new(i + 1, text.trim_end()))
            .collect();

        let blocks = self.segment_lines(&lines, &ctx.config);
        let observations = blocks
            .iter()
            .filter(|b| b.as_observation().is_some())
            .count();
        tracing::debug!(
            lines = lines.len(),
            blocks = blocks.len(),
            observations,
            "segmented transcript"
        );
        if observations == 0 {
            return Vec::new();
        }
        blocks
    }

    fn segment_lines(&self, lines: &[SourceLine], config: &ParseConfig) -> Vec<RawBlock> {
        let mut blocks = Vec::new();
        let mut open: Option<Open> = None;
        let mut pending_zone: Option<String> = None;

        for pos in 0..lines.len() {
            let cursor = LineCursor::new(lines, pos);
            let line = cursor.current();

            match self.matchers.classify(&cursor, config) {
                LineClass::Blank => {
                    if let Some(Open::Observation { block, .. }) = &mut open {
                        block.lines.push(line.clone());
                    }
                }
                LineClass::Prompt => {}
                LineClass::ZoneBanner(name) => {
                    close(&mut blocks, open.take());
                    pending_zone = Some(name);
                }
                LineClass::Movement { text, .. } | LineClass::Command(text) => {
                    close(&mut blocks, open.take());
                    open = Some(Open::Command(CommandBlock {
                        index: 0,
                        command: SourceLine::new(line.number, text),
                        response: Vec::new(),
                    }));
                }
                LineClass::Title
                    if !matches!(
                        open,
                        Some(Open::Observation {
                            awaiting_exits: true,
                            ..
                        })
                    ) =>
                {
                    close(&mut blocks, open.take());
                    open = Some(Open::Observation {
                        block: ObservationBlock {
                            index: 0,
                            lines: vec![line.clone()],
                            zone_hint: pending_zone.take(),
                        },
                        awaiting_exits: true,
                    });
                }
                LineClass::Title | LineClass::Text => match &mut open {
                    Some(Open::Observation {
                        block,
                        awaiting_exits,
                    }) => {
                        if *awaiting_exits && is_exit_line(&line.text) {
                            *awaiting_exits = false;
                        }
                        block.lines.push(line.clone());
                    }
                    Some(Open::Command(cmd)) => cmd.response.push(line.clone()),
                    None => {}
                },
            }
        }
        close(&mut blocks, open);
        blocks
    }
}

fn close(blocks: &mut Vec<RawBlock>, open: Option<Open>) {
    let index = blocks.len();
    match open {
        Some(Open::Observation { mut block, .. }) => {
            while block.lines.last().is_some_and(SourceLine::is_blank) {
                block.lines.pop();
            }
            block.index = index;
            blocks.push(RawBlock::Observation(block));
        }
        Some(Open::Command(mut cmd)) => {
            cmd.index = index;
            blocks.push(RawBlock::Command(cmd));
        }
        None => {}
    }
}
