//! Warning sink shared by the pipeline stages.
//!
//! Warnings never abort a run. Each one is kept for the end-of-run summary
//! and forwarded to `tracing` as it happens.

use std::fmt;

use crate::block::LineRange;

/// Which stage raised a warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WarningKind {
    /// An observation block could not be turned into a room.
    Extraction,
    /// A movement command could not be tied to a destination room.
    Correlation,
    /// Two observations disagreed about where an exit leads.
    Dedup,
    /// Zone hints disagreed or could not be applied.
    Zone,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Extraction => "extraction",
            Self::Correlation => "correlation",
            Self::Dedup => "dedup",
            Self::Zone => "zone",
        };
        f.write_str(name)
    }
}

/// A non-fatal problem found while parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    /// Stage that raised the warning.
    pub kind: WarningKind,
    /// Human-readable description.
    pub message: String,
    /// Transcript lines involved, when known.
    pub lines: Option<LineRange>,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.kind)?;
        if let Some(lines) = self.lines {
            write!(f, "{lines}: ")?;
        }
        f.write_str(&self.message)
    }
}

/// Collects warnings for one parse run.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning and logs it.
    pub fn warn(&mut self, kind: WarningKind, lines: Option<LineRange>, message: impl Into<String>) {
        let warning = Warning {
            kind,
            message: message.into(),
            lines,
        };
        tracing::warn!(kind = %warning.kind, "{warning}");
        self.warnings.push(warning);
    }

    /// All warnings in the order they were raised.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Number of warnings of one kind.
    #[must_use]
    pub fn count(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Number of warnings recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }
}
