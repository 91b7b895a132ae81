//! Per-run configuration and the context value threaded through every stage.

use crate::diagnostics::Diagnostics;

/// Heuristic limits and the caller's zone choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseConfig {
    /// Explicit zone for every room; auto-detection when `None`.
    pub zone_override: Option<u64>,
    /// Longest line (in characters) accepted as a room title.
    pub max_title_len: usize,
    /// Most words accepted in a room title.
    pub max_title_words: usize,
    /// How many lines the segmenter scans ahead for an exit line.
    pub lookahead_lines: usize,
    /// Description words used first when disambiguating duplicate titles.
    pub key_prefix_words: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            zone_override: None,
            max_title_len: 80,
            max_title_words: 12,
            lookahead_lines: 40,
            key_prefix_words: 6,
        }
    }
}

impl ParseConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to assign every room to one zone.
    #[must_use]
    pub fn with_zone_override(mut self, zone: Option<u64>) -> Self {
        self.zone_override = zone;
        self
    }

    /// Builder method to set the title length limit.
    #[must_use]
    pub fn with_max_title_len(mut self, len: usize) -> Self {
        self.max_title_len = len;
        self
    }

    /// Builder method to set the title word limit.
    #[must_use]
    pub fn with_max_title_words(mut self, words: usize) -> Self {
        self.max_title_words = words;
        self
    }

    /// Builder method to set the exit-line look-ahead window.
    #[must_use]
    pub fn with_lookahead_lines(mut self, lines: usize) -> Self {
        self.lookahead_lines = lines;
        self
    }

    /// Builder method to set the key disambiguation prefix.
    #[must_use]
    pub fn with_key_prefix_words(mut self, words: usize) -> Self {
        self.key_prefix_words = words.max(1);
        self
    }
}

/// Everything a stage may read or report to, passed explicitly.
#[derive(Clone, Debug, Default)]
pub struct ParseContext {
    /// Run configuration.
    pub config: ParseConfig,
    /// Warning sink.
    pub diagnostics: Diagnostics,
}

impl ParseContext {
    /// Creates a context from a configuration.
    #[must_use]
    pub fn new(config: ParseConfig) -> Self {
        Self {
            config,
            diagnostics: Diagnostics::new(),
        }
    }
}
